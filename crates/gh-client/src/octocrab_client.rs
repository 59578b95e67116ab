//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! List endpoints follow `Link: rel="next"` headers up to [`MAX_PAGES`].

use crate::client::GitHubClient;
use crate::types::{CommentPayload, IssueComment, PostedComment, PullRequest, User};
use anyhow::Context;
use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use log::{debug, warn};
use octocrab::models::CommentId;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Upper bound on pages fetched from any list endpoint
pub const MAX_PAGES: usize = 10;

/// Items requested per page
pub const PER_PAGE: u8 = 100;

/// Query parameters for list endpoints
#[derive(Debug, Serialize)]
struct ListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    head: Option<&'a str>,
    per_page: u8,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client against `base_url` authenticating with `token`
    ///
    /// Every request carries `Authorization: token <token>` and JSON
    /// `Accept`/`Content-Type` headers. Requests are sent once; creating a
    /// comment is not idempotent, so failures are never retried.
    pub fn connect(base_url: &str, token: &str) -> anyhow::Result<Self> {
        debug!("Creating GitHub client for {}", base_url);

        let octocrab = Octocrab::builder()
            .base_uri(base_url)
            .with_context(|| format!("Invalid API base URL '{}'", base_url))?
            .add_header(AUTHORIZATION, format!("token {}", token))
            .add_header(ACCEPT, "application/json".to_string())
            .add_header(CONTENT_TYPE, "application/json".to_string())
            .add_retry_config(RetryConfig::None)
            .build()
            .context("Failed to build Octocrab client")?;

        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Drain `first` and the pages linked after it
    async fn collect_pages<T>(&self, first: Page<T>) -> anyhow::Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = first.items;
        let mut next = first.next;
        let mut fetched = 1;

        while next.is_some() && fetched < MAX_PAGES {
            match self.octocrab.get_page::<T>(&next).await? {
                Some(page) => {
                    items.extend(page.items);
                    next = page.next;
                    fetched += 1;
                }
                None => break,
            }
        }

        if next.is_some() {
            warn!(
                "Stopped after {} pages, remaining results were not fetched",
                MAX_PAGES
            );
        }

        Ok(items)
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_pull_requests_by_head(
        &self,
        owner: &str,
        repo: &str,
        head: &str,
    ) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Fetching PRs for {}/{} with head {}", owner, repo, head);

        let route = format!("/repos/{}/{}/pulls", owner, repo);
        let params = ListParams {
            head: Some(head),
            per_page: PER_PAGE,
        };
        let first: Page<PullRequest> = self
            .octocrab
            .get(route, Some(&params))
            .await
            .with_context(|| format!("Failed to list pull requests of {}/{}", owner, repo))?;

        let prs = self.collect_pages(first).await?;
        debug!("Fetched {} PRs for {}/{}", prs.len(), owner, repo);
        Ok(prs)
    }

    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> anyhow::Result<PostedComment> {
        let route = format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue_number);
        debug!("POST {}", route);
        let failed = || format!("Failed to comment on #{} in {}/{}", issue_number, owner, repo);

        let response = self
            .octocrab
            ._post(route.as_str(), Some(&CommentPayload { body }))
            .await
            .with_context(failed)?;
        let response = octocrab::map_github_error(response)
            .await
            .with_context(failed)?;

        // Kept byte for byte for the success report
        let raw_body = self
            .octocrab
            .body_to_string(response)
            .await
            .context("Failed to read created comment response")?;
        let comment: IssueComment = serde_json::from_str(&raw_body)
            .context("Unexpected response shape for created comment")?;

        Ok(PostedComment { comment, raw_body })
    }

    async fn fetch_current_user(&self) -> anyhow::Result<User> {
        debug!("GET /user");

        let user: User = self
            .octocrab
            .get("/user", None::<&()>)
            .await
            .context("Failed to fetch authenticated user")?;

        debug!("Authenticated as {} ({})", user.login, user.id);
        Ok(user)
    }

    async fn fetch_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> anyhow::Result<Vec<IssueComment>> {
        let route = format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue_number);
        debug!("GET {}", route);

        let params = ListParams {
            head: None,
            per_page: PER_PAGE,
        };
        let first: Page<IssueComment> = self
            .octocrab
            .get(route, Some(&params))
            .await
            .with_context(|| {
                format!("Failed to list comments of #{} in {}/{}", issue_number, owner, repo)
            })?;

        self.collect_pages(first).await
    }

    async fn delete_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> anyhow::Result<()> {
        debug!("DELETE /repos/{}/{}/issues/comments/{}", owner, repo, comment_id);

        self.octocrab
            .issues(owner, repo)
            .delete_comment(CommentId(comment_id))
            .await
            .with_context(|| format!("Failed to delete comment {}", comment_id))?;

        Ok(())
    }
}
