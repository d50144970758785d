//! GitLab API client module using reqwest.
//!
//! Provides a trait-based abstraction for GitLab operations, with
//! authentication via a personal access token.

mod client;
mod error;
mod issue;
#[cfg(test)]
pub mod mock;
mod models;
mod project;

pub use client::GitLabClient;
pub use error::GitLabError;
pub use issue::IssueClient;
pub use models::{Issue, Project};
pub use project::ProjectClient;

#[cfg(test)]
pub use mock::GitLabMockServer;
