//! In-memory `GitHubClient` recording every call

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use gh_client::{
    GitHubClient, IssueComment, PostedComment, PullRequest, PullRequestHead, PullRequestState,
    User,
};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListPullRequests { head: String },
    CreateComment { issue: u64, body: String },
    CurrentUser,
    ListComments { issue: u64 },
    DeleteComment { id: u64 },
}

pub fn pull_request(number: u64, state: PullRequestState, sha: &str) -> PullRequest {
    PullRequest {
        number,
        state,
        head: PullRequestHead {
            sha: sha.to_string(),
            ref_field: None,
        },
    }
}

pub fn comment(id: u64, user_id: Option<u64>) -> IssueComment {
    IssueComment {
        id,
        body: Some(format!("comment {}", id)),
        user: user_id.map(|id| User {
            id,
            login: format!("user{}", id),
        }),
    }
}

pub struct FakeClient {
    pull_requests: Vec<PullRequest>,
    comments: Vec<IssueComment>,
    user: Option<User>,
    created_comment_id: u64,
    fail_create: bool,
    fail_deletes: Vec<u64>,
    calls: Mutex<Vec<Call>>,
}

impl Default for FakeClient {
    fn default() -> Self {
        Self {
            pull_requests: Vec::new(),
            comments: Vec::new(),
            user: Some(User {
                id: 1,
                login: "ci-bot".to_string(),
            }),
            created_comment_id: 100,
            fail_create: false,
            fail_deletes: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeClient {
    pub fn with_pull_requests(mut self, prs: Vec<PullRequest>) -> Self {
        self.pull_requests = prs;
        self
    }

    pub fn with_comments(mut self, comments: Vec<IssueComment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn without_user(mut self) -> Self {
        self.user = None;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_delete(mut self, id: u64) -> Self {
        self.fail_deletes.push(id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::DeleteComment { id } => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl GitHubClient for FakeClient {
    async fn fetch_pull_requests_by_head(
        &self,
        _owner: &str,
        _repo: &str,
        head: &str,
    ) -> Result<Vec<PullRequest>> {
        self.record(Call::ListPullRequests {
            head: head.to_string(),
        });
        Ok(self.pull_requests.clone())
    }

    async fn create_issue_comment(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<PostedComment> {
        self.record(Call::CreateComment {
            issue: issue_number,
            body: body.to_string(),
        });
        if self.fail_create {
            return Err(anyhow!("connection reset"));
        }

        let comment = IssueComment {
            id: self.created_comment_id,
            body: Some(body.to_string()),
            user: self.user.clone(),
        };
        Ok(PostedComment {
            raw_body: format!("{{\"id\":{}}}", comment.id),
            comment,
        })
    }

    async fn fetch_current_user(&self) -> Result<User> {
        self.record(Call::CurrentUser);
        self.user.clone().ok_or_else(|| anyhow!("Bad credentials"))
    }

    async fn fetch_issue_comments(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
    ) -> Result<Vec<IssueComment>> {
        self.record(Call::ListComments {
            issue: issue_number,
        });
        Ok(self.comments.clone())
    }

    async fn delete_issue_comment(&self, _owner: &str, _repo: &str, comment_id: u64) -> Result<()> {
        self.record(Call::DeleteComment { id: comment_id });
        if self.fail_deletes.contains(&comment_id) {
            return Err(anyhow!("Not Found"));
        }
        Ok(())
    }
}
