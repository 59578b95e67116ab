//! GitHub API client for pull request comments
//!
//! This crate provides a trait-based GitHub API client covering the calls a
//! CI step needs to publish a pull request comment and prune older ones.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_pull_requests_by_head()                 │
//! │  - create_issue_comment()                        │
//! │  - fetch_current_user()                          │
//! │  - fetch_issue_comments()                        │
//! │  - delete_issue_comment()                        │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::connect("https://api.github.com", "token")?;
//! let prs = client
//!     .fetch_pull_requests_by_head("owner", "repo", "owner:feature")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::{OctocrabClient, MAX_PAGES, PER_PAGE};
pub use types::{
    CommentPayload, IssueComment, PostedComment, PullRequest, PullRequestHead, PullRequestState,
    User,
};
