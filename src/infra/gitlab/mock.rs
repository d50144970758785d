//! wiremock-based GitLab mock server for testing.
//!
//! Provides `GitLabMockServer` for HTTP-level mocking of GitLab API calls,
//! exercised through the real `GitLabClient`.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitLabClient;

/// Create a mock issue JSON object in the shape the issues API returns.
pub fn mock_issue_json(iid: u64, title: &str, description: &str) -> serde_json::Value {
    json!({
        "iid": iid,
        "title": title,
        "description": description,
        "state": "opened",
        "web_url": format!("https://gitlab.com/group/project/-/issues/{iid}"),
        "created_at": "2024-01-02T03:04:05Z",
    })
}

pub struct GitLabMockServer {
    server: MockServer,
}

impl GitLabMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A client pointed at this mock server.
    pub fn client(&self) -> GitLabClient {
        GitLabClient::new(self.server.uri(), "test-token")
    }

    /// The request path a project lookup uses for `full_path`.
    fn project_lookup_path(full_path: &str) -> String {
        format!("/projects/{}", full_path.replace('/', "%2F"))
    }

    /// Mock a successful project lookup.
    pub async fn project(&self, full_path: &str, id: u64) {
        Mock::given(method("GET"))
            .and(path(Self::project_lookup_path(full_path)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "path_with_namespace": full_path,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a failed project lookup.
    pub async fn project_not_found(&self, full_path: &str) {
        Mock::given(method("GET"))
            .and(path(Self::project_lookup_path(full_path)))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"message": "404 Project Not Found"})),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock issue creation, asserting on the submitted title and description.
    pub async fn create_issue(
        &self,
        project_id: u64,
        iid: u64,
        title: &str,
        description: &str,
    ) {
        Mock::given(method("POST"))
            .and(path(format!("/projects/{project_id}/issues")))
            .and(body_partial_json(json!({
                "title": title,
                "description": description,
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(mock_issue_json(iid, title, description)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock fetching an issue by number.
    pub async fn issue(&self, project_id: u64, iid: u64, title: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/projects/{project_id}/issues/{iid}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(mock_issue_json(iid, title, title)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a missing issue.
    pub async fn issue_not_found(&self, project_id: u64, iid: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/projects/{project_id}/issues/{iid}")))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "404 Not Found"})),
            )
            .mount(&self.server)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::git::parse_gitlab_url;
    use crate::infra::gitlab::{GitLabError, IssueClient, ProjectClient};

    fn project_path(full_path: &str) -> crate::infra::git::ProjectPath {
        parse_gitlab_url(&format!("git@gitlab.com:{full_path}.git")).unwrap()
    }

    #[tokio::test]
    async fn test_get_project() {
        let mock = GitLabMockServer::start().await;
        mock.project("group/sub/project", 7).await;

        let project = mock
            .client()
            .get_project(&project_path("group/sub/project"))
            .await
            .unwrap();

        assert_eq!(project.id, 7);
        assert_eq!(project.path_with_namespace, "group/sub/project");
    }

    #[tokio::test]
    async fn test_get_project_not_found() {
        let mock = GitLabMockServer::start().await;
        mock.project_not_found("group/missing").await;

        let err = mock
            .client()
            .get_project(&project_path("group/missing"))
            .await
            .unwrap_err();

        match err {
            GitLabError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "404 Project Not Found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_create_issue() {
        let mock = GitLabMockServer::start().await;
        mock.create_issue(7, 42, "Fix login", "It is broken").await;

        let issue = mock
            .client()
            .create_issue(7, "Fix login", "It is broken")
            .await
            .unwrap();

        assert_eq!(issue.iid, 42);
        assert_eq!(issue.title, "Fix login");
        assert_eq!(issue.state, "opened");
        assert_eq!(
            issue.web_url,
            "https://gitlab.com/group/project/-/issues/42"
        );
    }

    #[tokio::test]
    async fn test_get_issue() {
        let mock = GitLabMockServer::start().await;
        mock.issue(7, 42, "Fix login").await;

        let issue = mock.client().get_issue(7, 42).await.unwrap();

        assert_eq!(issue.iid, 42);
        assert_eq!(issue.title, "Fix login");
    }

    #[tokio::test]
    async fn test_get_issue_not_found() {
        let mock = GitLabMockServer::start().await;
        mock.issue_not_found(7, 99).await;

        let err = mock.client().get_issue(7, 99).await.unwrap_err();
        assert!(matches!(err, GitLabError::Api { status: 404, .. }));
    }
}
