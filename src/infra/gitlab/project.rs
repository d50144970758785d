//! Project operations.

use super::client::{GitLabClient, encode_project_path};
use super::error::Result;
use super::models::Project;
use crate::infra::git::ProjectPath;

/// Trait for project operations.
#[async_trait::async_trait]
pub trait ProjectClient: Send + Sync {
    /// Look up a project by its namespace/project path.
    async fn get_project(&self, path: &ProjectPath) -> Result<Project>;
}

#[async_trait::async_trait]
impl ProjectClient for GitLabClient {
    async fn get_project(&self, path: &ProjectPath) -> Result<Project> {
        let response = self
            .get(&format!("/projects/{}", encode_project_path(path)))
            .await?;
        Ok(response.json().await?)
    }
}
