//! Test utilities for creating temporary git repositories.

use std::path::PathBuf;

use git2::Repository;
use tempfile::TempDir;

use super::repo::open_repo_at;

/// A temporary git repository for testing.
pub struct TempRepo {
    pub dir: TempDir,
}

impl TempRepo {
    /// Create a new temporary git repository whose origin remote points at
    /// a GitLab project path, e.g. `group/project`.
    pub fn new(project_path: &str, branch: &str) -> Self {
        Self::with_origin_url(&format!("git@gitlab.com:{project_path}.git"), branch)
    }

    /// Create a new temporary git repository with an arbitrary origin URL.
    pub fn with_origin_url(url: &str, branch: &str) -> Self {
        let temp = Self::without_origin(branch);
        let repo = temp.open();
        repo.remote("origin", url).expect("set origin");
        temp
    }

    /// Create a new temporary git repository with no remotes configured.
    pub fn without_origin(branch: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repo");

        // Create initial commit so HEAD exists
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .expect("create initial commit");
        }

        // Rename default branch if needed
        {
            let head = repo.head().expect("get head");
            let current = head.shorthand().unwrap_or("master").to_string();
            drop(head); // Release borrow before renaming
            if current != branch {
                let mut branch_ref = repo
                    .find_branch(&current, git2::BranchType::Local)
                    .expect("find branch");
                branch_ref.rename(branch, true).expect("rename branch");
            }
        }

        Self { dir }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Open the repository.
    pub fn open(&self) -> Repository {
        open_repo_at(self.dir.path()).expect("open temp repo")
    }
}
