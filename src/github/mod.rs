pub mod client;
pub mod fetch;

pub use client::{load_commits, parse_commits, GitHubClient, GitHubConfig, DEFAULT_API_BASE};
pub use fetch::CommitSource;

use crate::error::{Result, VizError};
use std::fmt;
use std::str::FromStr;

/// `user/repo` pair naming a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub user: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(user: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        let user = user.into().trim().to_string();
        let repo = repo.into().trim().to_string();
        let valid = |s: &str| !s.is_empty() && !s.contains('/') && !s.contains(char::is_whitespace);
        if !valid(&user) || !valid(&repo) {
            return Err(VizError::InvalidRepo(format!("{user}/{repo}")));
        }
        Ok(Self { user, repo })
    }
}

impl FromStr for RepoRef {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        let (user, repo) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| VizError::InvalidRepo(s.to_string()))?;
        RepoRef::new(user, repo)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_slash_repo() {
        let r: RepoRef = "angular/angular.js".parse().unwrap();
        assert_eq!(r.user, "angular");
        assert_eq!(r.repo, "angular.js");
        assert_eq!(r.to_string(), "angular/angular.js");
    }

    #[test]
    fn rejects_malformed_refs() {
        for bad in ["angular", "/repo", "user/", "a/b/c", "a b/c"] {
            assert!(bad.parse::<RepoRef>().is_err(), "{bad} should be rejected");
        }
    }
}
