//! Configuration for gh-pr-comment
//!
//! This crate provides:
//! - Step inputs (`StepConfig`) read from the environment or flags
//! - Validation into a `ValidatedConfig`
//! - Git remote URL parsing (`Repository`)
//! - Comment body rendering (`CommentBody`)

pub mod comment_body;
pub mod repository;
pub mod step_config;

use thiserror::Error;

pub use comment_body::{CommentBody, QR_CODE_CHART_URL};
pub use repository::Repository;
pub use step_config::{PullRequestTarget, Secret, StepConfig, ValidatedConfig};

/// Errors in the step inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid repository URL '{0}', expected https://host/owner/repo or git@host:owner/repo")]
    InvalidRepositoryUrl(String),

    #[error("Missing required input: {0}")]
    MissingValue(&'static str),

    #[error("Invalid pull_request_id '{0}', expected a number")]
    InvalidPullRequestId(String),

    #[error("Either pull_request_id or commit must be set")]
    MissingCommit,

    #[error("Either comment or apk_path must be set")]
    MissingCommentSource,

    #[error("Only one of comment and apk_path may be set")]
    ConflictingCommentSource,
}
