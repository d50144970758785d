//! Repository operations.

use std::path::Path;

use git2::{Repository, RepositoryOpenFlags};

use super::error::{GitError, Result};

/// Open the git repository containing the current directory.
pub fn open_repo() -> Result<Repository> {
    let cwd = std::env::current_dir().map_err(|_| GitError::NotInRepo)?;
    open_repo_at(&cwd)
}

/// Open the git repository containing `path`.
///
/// libgit2 walks upward through parent directories until it finds a
/// repository root, and stops with an error once the filesystem root is
/// reached without finding one.
pub fn open_repo_at(path: &Path) -> Result<Repository> {
    Repository::open_ext(
        path,
        RepositoryOpenFlags::empty(),
        std::iter::empty::<&Path>(),
    )
    .map_err(|_| GitError::NotInRepo)
}

/// Get the remote URL for "origin".
pub fn origin_url(repo: &Repository) -> Result<String> {
    let remote = repo
        .find_remote("origin")
        .map_err(|_| GitError::NoOriginRemote)?;
    remote
        .url()
        .map(str::to_string)
        .ok_or(GitError::NoOriginRemote)
}

/// Get the current branch short name.
/// Returns "HEAD" if in detached HEAD state.
pub fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo.head()?;
    Ok(head.shorthand().unwrap_or("HEAD").to_string())
}
