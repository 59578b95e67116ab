//! Pull request lookup by branch and commit

use anyhow::Result;
use gh_client::{GitHubClient, PullRequest};
use gh_pr_comment_config::{PullRequestTarget, Repository};
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No open pull request with head {head} at commit {commit}")]
    PullRequestNotFound { head: String, commit: String },
}

/// First open pull request whose head is at `commit`
pub fn find_open_pull_request(prs: &[PullRequest], commit: &str) -> Option<u64> {
    prs.iter().find(|pr| pr.is_open_at(commit)).map(|pr| pr.number)
}

/// Determine the number of the pull request to comment on
///
/// A configured number is returned as-is without touching the API.
pub async fn resolve_pull_request(
    client: &dyn GitHubClient,
    repository: &Repository,
    branch: &str,
    target: &PullRequestTarget,
) -> Result<u64> {
    let commit = match target {
        PullRequestTarget::Number(number) => {
            debug!("Using configured pull request #{}", number);
            return Ok(*number);
        }
        PullRequestTarget::HeadCommit(commit) => commit,
    };

    let head = repository.head_filter(branch);
    let prs = client
        .fetch_pull_requests_by_head(&repository.owner, &repository.repo, &head)
        .await?;

    let number = find_open_pull_request(&prs, commit).ok_or_else(|| {
        ResolveError::PullRequestNotFound {
            head: head.clone(),
            commit: commit.clone(),
        }
    })?;

    info!("Found pull request #{} for {} at {}", number, head, commit);
    Ok(number)
}
