//! Step configuration
//!
//! Every input is read from the lowercase environment variable the CI host
//! exports for the step, or from the equivalent command-line flag. Optional
//! inputs the host leaves unset usually arrive as empty strings, so emptiness
//! is checked during validation rather than by the argument parser.

use crate::{CommentBody, ConfigError, Repository};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use log::info;
use std::fmt;

/// A value that must never show up in logs
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(*****)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*****")
    }
}

/// Raw step inputs as provided by the pipeline
#[derive(Debug, Clone, Parser)]
#[command(name = "gh-pr-comment", version)]
#[command(about = "Post a comment on a GitHub pull request and prune older ones")]
pub struct StepConfig {
    /// Token used to authenticate against the GitHub API
    #[arg(long, env = "github_token", hide_env_values = true)]
    pub github_token: Secret,

    /// Git remote URL of the repository (HTTPS or SSH)
    #[arg(long, env = "repository_url")]
    pub repository_url: String,

    /// Source branch of the pull request
    #[arg(long, env = "branch_name")]
    pub branch_name: String,

    /// GitHub REST API base URL (e.g. https://api.github.com)
    #[arg(long, env = "api_base_url")]
    pub api_base_url: String,

    /// Pull request number; skips the lookup by branch and commit
    #[arg(long, env = "pull_request_id")]
    pub pull_request_id: Option<String>,

    /// Commit SHA the pull request head must point at
    #[arg(long, env = "commit")]
    pub commit: Option<String>,

    /// Literal comment text
    #[arg(long, env = "comment")]
    pub comment: Option<String>,

    /// Artifact URL to publish as a QR code
    #[arg(long, env = "apk_path")]
    pub apk_path: Option<String>,

    /// Delete earlier comments of the same user after posting
    #[arg(
        long,
        env = "delete_previous_comments",
        default_value = "yes",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub delete_previous_comments: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the pull request to comment on is found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestTarget {
    /// Number given up front
    Number(u64),
    /// Open pull request whose head is at this commit
    HeadCommit(String),
}

/// Step inputs after validation
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub token: Secret,
    pub api_base_url: String,
    pub repository: Repository,
    pub branch_name: String,
    pub target: PullRequestTarget,
    pub body: CommentBody,
    pub delete_previous_comments: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ConfigError::MissingValue(name))
    } else {
        Ok(value)
    }
}

impl StepConfig {
    /// Check the inputs and derive the values the pipeline works with
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        if self.github_token.expose().trim().is_empty() {
            return Err(ConfigError::MissingValue("github_token"));
        }

        let repository = Repository::parse(required(&self.repository_url, "repository_url")?)?;
        let branch_name = required(&self.branch_name, "branch_name")?.to_string();
        let api_base_url = required(&self.api_base_url, "api_base_url")?
            .trim_end_matches('/')
            .to_string();

        let target = match (non_empty(&self.pull_request_id), non_empty(&self.commit)) {
            (Some(id), _) => PullRequestTarget::Number(
                id.parse()
                    .map_err(|_| ConfigError::InvalidPullRequestId(id.to_string()))?,
            ),
            (None, Some(commit)) => PullRequestTarget::HeadCommit(commit.to_string()),
            (None, None) => return Err(ConfigError::MissingCommit),
        };

        let body = match (non_empty(&self.comment), non_empty(&self.apk_path)) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCommentSource),
            // Literal text is kept untrimmed
            (Some(_), None) => CommentBody::Literal(self.comment.clone().unwrap_or_default()),
            (None, Some(path)) => CommentBody::QrCode {
                artifact_path: path.to_string(),
            },
            (None, None) => return Err(ConfigError::MissingCommentSource),
        };

        Ok(ValidatedConfig {
            token: self.github_token.clone(),
            api_base_url,
            repository,
            branch_name,
            target,
            body,
            delete_previous_comments: self.delete_previous_comments,
        })
    }

    /// Print the inputs with the token redacted
    pub fn log_summary(&self) {
        let show = |value: &Option<String>| value.clone().unwrap_or_default();

        info!("Configs:");
        info!("- github_token: {}", self.github_token);
        info!("- repository_url: {}", self.repository_url);
        info!("- branch_name: {}", self.branch_name);
        info!("- api_base_url: {}", self.api_base_url);
        info!("- pull_request_id: {}", show(&self.pull_request_id));
        info!("- commit: {}", show(&self.commit));
        info!("- comment: {}", show(&self.comment));
        info!("- apk_path: {}", show(&self.apk_path));
        info!(
            "- delete_previous_comments: {}",
            self.delete_previous_comments
        );
    }
}
