//! GitLab-related git operations.

use std::fmt;
use std::sync::LazyLock;

use git2::Repository;
use regex::Regex;

use super::error::{GitError, Result};
use super::repo::origin_url;

// Only the conventional SSH remote shape is recognized. Host is
// case-sensitive and the `.git` suffix is mandatory.
static GITLAB_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^git@gitlab\.com:(.*)\.git$").unwrap());

/// Full namespace/project path of a GitLab project, e.g. `group/sub/project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath(String);

impl ProjectPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse the namespace/project path from a GitLab SSH remote URL.
pub fn parse_gitlab_url(url: &str) -> Result<ProjectPath> {
    GITLAB_URL_RE
        .captures(url)
        .map(|captures| ProjectPath(captures[1].to_string()))
        .ok_or_else(|| GitError::InvalidGitLabUrl(url.to_string()))
}

/// Get the project path from the repository's "origin" remote.
pub fn gitlab_project_path(repo: &Repository) -> Result<ProjectPath> {
    let url = origin_url(repo)?;
    parse_gitlab_url(&url)
}
