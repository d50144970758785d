use anyhow::Result;
use clap::Args;
use git2::Repository;
use tracing::info;

use super::format::format_issue;
use crate::config::Config;
use crate::infra::git::{self, checkout_new_branch, issue_branch_name};
use crate::infra::gitlab::{GitLabClient, Issue, IssueClient, ProjectClient};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct CreateArgs {
    /// Title of the issue
    #[arg(short = 't', long)]
    pub title: String,

    /// Description of the issue (defaults to the title)
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Check out a new branch named after the issue
    #[arg(short = 'b', long)]
    pub branch_out: bool,
}

pub async fn run(args: &CreateArgs) -> Result<()> {
    let config = Config::from_env()?;
    let repo = git::open_repo()?;
    let client = GitLabClient::new(&config.api_base, &config.token);

    let issue = create_issue(&client, &repo, args).await?;
    println!("{}", format_issue(&issue));

    // The issue stays created even if the checkout below fails; the two
    // steps are independent.
    if args.branch_out {
        branch_out(&repo, &issue)?;
    }

    Ok(())
}

/// Resolve the project from the origin remote and create an issue in it.
async fn create_issue<C>(client: &C, repo: &Repository, args: &CreateArgs) -> Result<Issue>
where
    C: ProjectClient + IssueClient,
{
    let path = git::gitlab_project_path(repo)?;
    let project = client.get_project(&path).await?;
    info!(
        "found project {} (id {})",
        project.path_with_namespace, project.id
    );

    let description = match args.description.as_deref() {
        Some(description) => description,
        None => {
            info!("assuming description is equal to the title");
            args.title.as_str()
        }
    };

    let issue = client
        .create_issue(project.id, &args.title, description)
        .await?;
    Ok(issue)
}

/// Create and switch to the issue branch, keeping local changes.
fn branch_out(repo: &Repository, issue: &Issue) -> Result<()> {
    let branch = issue_branch_name(issue.iid, &issue.title);
    info!("checking out {branch}");
    checkout_new_branch(repo, &branch)?;
    Ok(())
}
