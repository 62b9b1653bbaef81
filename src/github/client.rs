use crate::error::{Result, VizError};
use crate::model::{ApiCommit, Commit};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::RepoRef;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Settings for the commits endpoint client.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base: String,
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("commitviz/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GitHubConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Unauthenticated client for `GET /repos/{user}/{repo}/commits`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn commits_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}/commits",
            self.config.api_base.trim_end_matches('/'),
            repo.user,
            repo.repo
        )
    }

    /// One GET, no retries and no pagination: the first page is the data set.
    #[instrument(skip(self, repo), fields(repo = %repo))]
    pub async fn fetch_commits(&self, repo: &RepoRef) -> Result<Vec<Commit>> {
        let url = self.commits_url(repo);
        debug!("requesting {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "commits request failed");
            return Err(VizError::from_status(status.as_u16()));
        }

        let body = response.text().await?;
        let commits = parse_commits(&body)?;
        info!(count = commits.len(), "fetched commits");
        Ok(commits)
    }
}

/// Decode a commits API response body.
pub fn parse_commits(body: &str) -> Result<Vec<Commit>> {
    let api: Vec<ApiCommit> = serde_json::from_str(body)?;
    Ok(api.into_iter().map(Commit::from).collect())
}

/// Read a saved commits API response from disk.
pub fn load_commits(path: &Path) -> Result<Vec<Commit>> {
    let body = std::fs::read_to_string(path)?;
    let commits = parse_commits(&body)?;
    info!(count = commits.len(), path = %path.display(), "loaded commits");
    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builds_commits_url() {
        let client = GitHubClient::new(GitHubConfig::default()).unwrap();
        let repo = RepoRef::new("angular", "angular.js").unwrap();
        assert_eq!(
            client.commits_url(&repo),
            "https://api.github.com/repos/angular/angular.js/commits"
        );
    }

    #[test]
    fn custom_base_drops_trailing_slash() {
        let config = GitHubConfig::new().with_api_base("http://localhost:8080/");
        let client = GitHubClient::new(config).unwrap();
        let repo = RepoRef::new("a", "b").unwrap();
        assert_eq!(client.commits_url(&repo), "http://localhost:8080/repos/a/b/commits");
    }

    #[test]
    fn rejects_non_array_body() {
        let err = parse_commits(r#"{"message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, VizError::Serde(_)));
    }

    #[test]
    fn loads_commits_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"sha":"1","commit":{{"author":{{"name":"A","date":"2014-01-01T00:00:00Z"}},"message":"m"}}}}]"#
        )
        .unwrap();
        let commits = load_commits(file.path()).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].author_name, "A");
    }

    const ONE_COMMIT: &str =
        r#"[{"sha":"1","commit":{"author":{"name":"A","date":"2014-01-01T00:00:00Z"},"message":"m"}}]"#;

    /// Serve one canned response per connection, in order, then stop.
    async fn serve(responses: Vec<(u16, &'static str)>) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let response = format!(
                    "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn error_statuses_map_to_user_messages() {
        let base = serve(vec![(404, r#"{"message":"Not Found"}"#), (500, "")]).await;
        let client = GitHubClient::new(GitHubConfig::new().with_api_base(base)).unwrap();
        let repo = RepoRef::new("nobody", "nothing").unwrap();

        let not_found = client.fetch_commits(&repo).await.unwrap_err();
        assert!(matches!(not_found, VizError::RepositoryNotFound));
        assert_eq!(not_found.to_string(), "That repository does not exist");

        let server_error = client.fetch_commits(&repo).await.unwrap_err();
        assert!(matches!(server_error, VizError::Status(500)));
        assert_eq!(server_error.to_string(), "Error: 500");
    }

    #[tokio::test]
    async fn failed_refetch_keeps_the_shown_matrix() {
        use crate::state::AppState;

        let base = serve(vec![(200, ONE_COMMIT), (404, ""), (500, "")]).await;
        let client = GitHubClient::new(GitHubConfig::new().with_api_base(base)).unwrap();
        let repo = RepoRef::new("octo", "demo").unwrap();
        let mut state = AppState::new(repo.clone());

        state.apply_fetch(client.fetch_commits(&repo).await);
        assert!(!state.has_error());
        let shown = state.matrix.clone().unwrap();
        assert_eq!(shown.total_commits(), 1);

        state.apply_fetch(client.fetch_commits(&repo).await);
        assert_eq!(state.error, "That repository does not exist");
        assert_eq!(state.matrix.as_ref(), Some(&shown));

        state.apply_fetch(client.fetch_commits(&repo).await);
        assert_eq!(state.error, "Error: 500");
        assert_eq!(state.matrix.as_ref(), Some(&shown));
    }
}
