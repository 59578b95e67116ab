//! Repository model
//!
//! Locates the GitHub repository a git remote URL points at.

use crate::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A GitHub repository derived from its git remote URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    /// Host part of the remote (e.g. "github.com")
    pub host: String,
    /// Organization or owner name
    pub owner: String,
    /// Repository name, without `.git`
    pub repo: String,
}

impl Repository {
    /// Parse a git remote URL
    ///
    /// Supports:
    /// - `https://host/owner/repo[.git]` (and `http://`)
    /// - `ssh://git@host[:port]/owner/repo[.git]`
    /// - `git@host:owner/repo[.git]`
    /// - `host/owner/repo[.git]`
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        let invalid = || ConfigError::InvalidRepositoryUrl(url.to_string());

        let (authority, path) = match url.split_once("://") {
            Some((_, rest)) => rest.split_once('/'),
            None if is_scp_like(url) => url.split_once(':'),
            None => url.split_once('/'),
        }
        .ok_or_else(invalid)?;

        // Drop `user@` (and `user:password@`) in front of the host
        let host = authority.rsplit('@').next().unwrap_or(authority);
        if host.is_empty() {
            return Err(invalid());
        }

        let (owner, repo) = parse_owner_repo_path(path).ok_or_else(invalid)?;

        Ok(Self {
            host: host.to_string(),
            owner,
            repo,
        })
    }

    /// Display name for the repository (owner/repo)
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Head filter for the list-pulls endpoint (`owner:branch`)
    pub fn head_filter(&self, branch: &str) -> String {
        format!("{}:{}", self.owner, branch)
    }
}

impl FromStr for Repository {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repo)
    }
}

/// `git@host:path` style: a colon before any slash
fn is_scp_like(url: &str) -> bool {
    match (url.find(':'), url.find('/')) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Parse "owner/repo[.git]" into (owner, repo)
fn parse_owner_repo_path(path: &str) -> Option<(String, String)> {
    let mut parts = path.split('/').filter(|p| !p.is_empty());

    let owner = parts.next()?;
    let repo = parts.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if repo.is_empty() {
        return None;
    }

    Some((owner.to_string(), repo.to_string()))
}
