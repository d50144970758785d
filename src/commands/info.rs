use anyhow::Result;
use clap::Args;
use git2::Repository;
use tracing::info;

use super::format::format_issue;
use crate::config::Config;
use crate::infra::git::{self, issue_number_from_branch};
use crate::infra::gitlab::{GitLabClient, Issue, IssueClient, ProjectClient};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct InfoArgs {}

pub async fn run(_args: &InfoArgs) -> Result<()> {
    let config = Config::from_env()?;
    let repo = git::open_repo()?;
    let client = GitLabClient::new(&config.api_base, &config.token);

    let issue = current_issue(&client, &repo).await?;
    println!("{}", format_issue(&issue));

    Ok(())
}

/// Look up the issue tracked by the currently checked-out branch.
async fn current_issue<C>(client: &C, repo: &Repository) -> Result<Issue>
where
    C: ProjectClient + IssueClient,
{
    let path = git::gitlab_project_path(repo)?;
    let project = client.get_project(&path).await?;
    info!(
        "found project {} (id {})",
        project.path_with_namespace, project.id
    );

    let branch = git::current_branch(repo)?;
    let iid = issue_number_from_branch(&branch)?;

    let issue = client.get_issue(project.id, iid).await?;
    Ok(issue)
}
