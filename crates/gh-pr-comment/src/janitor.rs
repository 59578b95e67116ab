//! Removal of earlier comments left by the same user
//!
//! Deletes run one after another. A failed delete is logged and the loop moves
//! on; nothing is retried.

use anyhow::Result;
use gh_client::{GitHubClient, IssueComment};
use gh_pr_comment_config::Repository;
use log::{debug, info, warn};

/// What the cleanup did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Ids of comments that were deleted
    pub deleted: Vec<u64>,
    /// Ids of comments whose deletion failed
    pub failed: Vec<u64>,
}

/// Comments by `user_id` other than `keep_id`
pub fn stale_comment_ids(comments: &[IssueComment], user_id: u64, keep_id: u64) -> Vec<u64> {
    comments
        .iter()
        .filter(|c| c.author_id() == Some(user_id) && c.id != keep_id)
        .map(|c| c.id)
        .collect()
}

/// Delete every earlier comment of the token owner on `pr_number`
///
/// Errors are only returned when the user or the comment list cannot be
/// fetched; individual delete failures end up in the report.
pub async fn delete_previous_comments(
    client: &dyn GitHubClient,
    repository: &Repository,
    pr_number: u64,
    keep_id: u64,
) -> Result<CleanupReport> {
    let user = client.fetch_current_user().await?;
    let comments = client
        .fetch_issue_comments(&repository.owner, &repository.repo, pr_number)
        .await?;

    let stale = stale_comment_ids(&comments, user.id, keep_id);
    debug!(
        "{} of {} comments on #{} are earlier comments by {}",
        stale.len(),
        comments.len(),
        pr_number,
        user.login
    );

    let mut report = CleanupReport::default();
    for id in stale {
        match client
            .delete_issue_comment(&repository.owner, &repository.repo, id)
            .await
        {
            Ok(()) => {
                info!("Deleted previous comment {}", id);
                report.deleted.push(id);
            }
            Err(e) => {
                warn!("Failed to delete comment {}: {:#}", id, e);
                report.failed.push(id);
            }
        }
    }

    Ok(report)
}
