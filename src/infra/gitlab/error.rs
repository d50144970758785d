//! GitLab API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitLabError {
    #[error("GitLab API error: {message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GitLabError>;
