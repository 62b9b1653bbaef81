use crate::cli::CommonArgs;
use crate::error::Result;
use crate::model::Commit;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

use super::{load_commits, GitHubClient, GitHubConfig, RepoRef};

/// Where commits come from: the live API, or a saved response on disk.
///
/// Owns the runtime so callers outside async code (the CLI commands and the
/// terminal UI loop) can fetch with a plain method call.
pub struct CommitSource {
    client: GitHubClient,
    input: Option<PathBuf>,
    runtime: Runtime,
}

impl CommitSource {
    pub fn new(config: GitHubConfig, input: Option<PathBuf>) -> anyhow::Result<Self> {
        let client = GitHubClient::new(config).context("Failed to build HTTP client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        Ok(Self { client, input, runtime })
    }

    pub fn from_args(common: &CommonArgs) -> anyhow::Result<Self> {
        let config = GitHubConfig::new()
            .with_api_base(common.api_base.clone())
            .with_timeout(common.timeout.into());
        Self::new(config, common.input.clone())
    }

    pub fn is_offline(&self) -> bool {
        self.input.is_some()
    }

    pub fn fetch(&self, repo: &RepoRef) -> Result<Vec<Commit>> {
        match &self.input {
            Some(path) => load_commits(path),
            None => self.runtime.block_on(self.client.fetch_commits(repo)),
        }
    }

    /// Fetch with a stderr spinner; the spinner is skipped for machine output.
    pub fn fetch_with_progress(&self, repo: &RepoRef, show_progress: bool) -> Result<Vec<Commit>> {
        if !show_progress || self.is_offline() {
            return self.fetch(repo);
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Fetching commits for {repo}..."));
        pb.enable_steady_tick(Duration::from_millis(100));

        let result = self.fetch(repo);
        match &result {
            Ok(commits) => pb.finish_with_message(format!("Fetched {} commits", commits.len())),
            Err(_) => pb.finish_and_clear(),
        }
        result
    }
}
