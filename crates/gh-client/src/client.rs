//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait covering the REST calls the
//! comment step makes. The pipeline is written against the trait so it can be
//! driven by the octocrab implementation or by an in-memory fake in tests.

use crate::types::{IssueComment, PostedComment, PullRequest, User};
use async_trait::async_trait;

/// GitHub API client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a client can be shared by
/// reference across async calls.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
///
/// async fn say_hello(client: &dyn GitHubClient) -> anyhow::Result<u64> {
///     let posted = client.create_issue_comment("rust-lang", "rust", 1, "hello").await?;
///     Ok(posted.comment.id)
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch pull requests whose head matches `head`
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `head` - Head filter in `owner:branch` form
    ///
    /// # Returns
    ///
    /// The pull requests of every page fetched, in API order.
    async fn fetch_pull_requests_by_head(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
    ) -> anyhow::Result<Vec<PullRequest>>;

    /// Create a comment on an issue or pull request
    ///
    /// # Returns
    ///
    /// The created comment and the raw response body.
    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> anyhow::Result<PostedComment>;

    /// Fetch the user the token belongs to
    async fn fetch_current_user(&self) -> anyhow::Result<User>;

    /// Fetch all comments on an issue or pull request
    async fn fetch_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<Vec<IssueComment>>;

    /// Delete an issue comment by id
    async fn delete_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> anyhow::Result<()>;
}
