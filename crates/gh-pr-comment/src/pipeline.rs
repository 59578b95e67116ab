//! One pass of the step
//!
//! ```text
//! resolve PR ──► publish comment ──► [identify self ──► delete stale comments]
//! ```
//!
//! Anything failing up to and including the publish aborts the run. The
//! cleanup stage only reports what went wrong.

use crate::janitor::{self, CleanupReport};
use crate::publisher;
use crate::resolver;
use anyhow::Result;
use gh_client::{GitHubClient, PostedComment};
use gh_pr_comment_config::ValidatedConfig;
use log::{info, warn};

/// Result of the cleanup stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// `delete_previous_comments` is off
    Disabled,
    /// Ran to the end; individual deletes may still have failed
    Completed(CleanupReport),
    /// Could not identify the user or list comments
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub pull_request: u64,
    pub comment: PostedComment,
    pub cleanup: CleanupOutcome,
}

pub async fn run(client: &dyn GitHubClient, config: &ValidatedConfig) -> Result<RunReport> {
    let repository = &config.repository;

    let pull_request = resolver::resolve_pull_request(
        client,
        repository,
        &config.branch_name,
        &config.target,
    )
    .await?;

    let comment =
        publisher::publish_comment(client, repository, pull_request, &config.body).await?;

    let cleanup = if config.delete_previous_comments {
        let keep_id = comment.comment.id;
        match janitor::delete_previous_comments(client, repository, pull_request, keep_id).await {
            Ok(report) => {
                if !report.failed.is_empty() {
                    warn!("{} previous comments could not be deleted", report.failed.len());
                }
                CleanupOutcome::Completed(report)
            }
            Err(e) => {
                warn!("Skipping cleanup of previous comments: {:#}", e);
                CleanupOutcome::Failed(format!("{:#}", e))
            }
        }
    } else {
        info!("Keeping previous comments");
        CleanupOutcome::Disabled
    };

    Ok(RunReport {
        pull_request,
        comment,
        cleanup,
    })
}
