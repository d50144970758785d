//! Branch naming for issue branches.

use git2::Repository;
use git2::build::CheckoutBuilder;
use lazy_regex::regex_captures;

use super::error::{GitError, Result};

/// Build the branch name for an issue: `{iid}-{slug}`.
///
/// The slug is the issue title lowercased with ASCII spaces replaced by
/// hyphens. Nothing else is rewritten, so characters that are unusual in
/// branch names pass through untouched.
pub fn issue_branch_name(iid: u64, title: &str) -> String {
    let slug = title.to_lowercase().replace(' ', "-");
    format!("{iid}-{slug}")
}

/// Extract the issue number from a branch named `{iid}-...`.
///
/// The leading digit run is taken unconditionally, so a branch whose slug
/// itself starts with digits decodes to those digits.
pub fn issue_number_from_branch(branch: &str) -> Result<u64> {
    let (_, digits) = regex_captures!(r"^(\d+)-.*$", branch)
        .ok_or_else(|| GitError::NoIssueNumber(branch.to_string()))?;
    digits
        .parse()
        .map_err(|_| GitError::NoIssueNumber(branch.to_string()))
}

/// Create `branch` at HEAD and switch to it, keeping uncommitted changes.
pub fn checkout_new_branch(repo: &Repository, branch: &str) -> Result<()> {
    let head = repo.head()?.peel_to_commit()?;
    let created = repo.branch(branch, &head, false)?;
    let refname = created
        .get()
        .name()
        .ok_or_else(|| GitError::Git2(git2::Error::from_str("branch name is not valid UTF-8")))?
        .to_string();

    // Safe checkout refuses to overwrite local modifications instead of
    // discarding them.
    let mut opts = CheckoutBuilder::new();
    opts.safe();
    repo.checkout_tree(head.as_object(), Some(&mut opts))?;
    repo.set_head(&refname)?;

    Ok(())
}
