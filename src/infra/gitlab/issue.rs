//! Issue operations.

use serde_json::json;

use super::client::GitLabClient;
use super::error::Result;
use super::models::Issue;

/// Trait for issue operations.
#[async_trait::async_trait]
pub trait IssueClient: Send + Sync {
    /// Create an issue in a project.
    async fn create_issue(&self, project_id: u64, title: &str, description: &str)
    -> Result<Issue>;

    /// Get an issue by its per-project number.
    async fn get_issue(&self, project_id: u64, iid: u64) -> Result<Issue>;
}

#[async_trait::async_trait]
impl IssueClient for GitLabClient {
    async fn create_issue(
        &self,
        project_id: u64,
        title: &str,
        description: &str,
    ) -> Result<Issue> {
        let body = json!({
            "title": title,
            "description": description,
        });
        let response = self
            .post(&format!("/projects/{project_id}/issues"), &body)
            .await?;
        Ok(response.json().await?)
    }

    async fn get_issue(&self, project_id: u64, iid: u64) -> Result<Issue> {
        let response = self
            .get(&format!("/projects/{project_id}/issues/{iid}"))
            .await?;
        Ok(response.json().await?)
    }
}
