//! GitHub API data transfer objects
//!
//! These types mirror only the fields of the GitHub REST responses that the
//! comment step reads. Unknown fields are ignored on decode.

use serde::{Deserialize, Serialize};

/// A pull request from the list-pulls endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// Open/closed state as reported by GitHub
    pub state: PullRequestState,

    /// Head branch reference
    pub head: PullRequestHead,
}

impl PullRequest {
    /// Whether this PR is open and its head points at `commit`
    pub fn is_open_at(&self, commit: &str) -> bool {
        self.state == PullRequestState::Open && self.head.sha == commit
    }
}

/// Head side of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestHead {
    /// HEAD commit SHA
    pub sha: String,

    /// HEAD branch name (e.g., "feature/foo")
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_field: Option<String>,
}

/// Pull request state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    Open,
    Closed,
    /// Anything GitHub adds later
    #[serde(other)]
    Unknown,
}

/// A GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
}

/// A comment in an issue or pull request conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    pub id: u64,

    #[serde(default)]
    pub body: Option<String>,

    /// Author; `None` for comments of deleted accounts
    #[serde(default)]
    pub user: Option<User>,
}

impl IssueComment {
    /// Author id, if the author still exists
    pub fn author_id(&self) -> Option<u64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// Request body for creating an issue comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPayload<'a> {
    pub body: &'a str,
}

/// A freshly created comment together with the response it came from
#[derive(Debug, Clone)]
pub struct PostedComment {
    /// Decoded comment
    pub comment: IssueComment,

    /// Response body as returned by GitHub
    pub raw_body: String,
}
