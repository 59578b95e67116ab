//! Comment publishing

use anyhow::Result;
use gh_client::{GitHubClient, PostedComment};
use gh_pr_comment_config::{CommentBody, Repository};
use log::info;

/// Line reported once the comment is up
pub fn success_message(posted: &PostedComment) -> String {
    format!("Success: {}", posted.raw_body)
}

/// Post `body` on pull request `pr_number`
///
/// Every call creates a new comment.
pub async fn publish_comment(
    client: &dyn GitHubClient,
    repository: &Repository,
    pr_number: u64,
    body: &CommentBody,
) -> Result<PostedComment> {
    info!(
        "Commenting on {}#{}",
        repository.display_name(),
        pr_number
    );

    let posted = client
        .create_issue_comment(
            &repository.owner,
            &repository.repo,
            pr_number,
            &body.render(),
        )
        .await?;

    info!("{}", success_message(&posted));
    Ok(posted)
}
