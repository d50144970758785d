//! GitLab REST API client implementation using reqwest.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;

use super::error::{GitLabError, Result};
use crate::infra::git::ProjectPath;

/// Characters escaped when a project path is embedded as one URL segment.
/// `/` is the one that matters; the rest keep the URL unambiguous.
const PROJECT_PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+');

/// Production client for the GitLab v4 REST API.
pub struct GitLabClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl GitLabClient {
    /// Create a client for the given API base URL and access token.
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let response = self
            .http
            .get(format!("{}{}", self.api_base, path))
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?;
        check_status(response).await
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response> {
        let response = self
            .http
            .post(format!("{}{}", self.api_base, path))
            .header("PRIVATE-TOKEN", &self.token)
            .json(body)
            .send()
            .await?;
        check_status(response).await
    }
}

/// Percent-encode a project path for use as a single URL segment,
/// e.g. `group/sub/project` -> `group%2Fsub%2Fproject`.
pub(crate) fn encode_project_path(path: &ProjectPath) -> String {
    utf8_percent_encode(path.as_str(), PROJECT_PATH_SET).to_string()
}

/// Error body returned by the GitLab API. `message` is sometimes a plain
/// string and sometimes a per-field validation object.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<serde_json::Value>,
    error: Option<String>,
}

/// Convert a non-success response into `GitLabError::Api`, extracting the
/// message from the error body when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => format_error_body(&body),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    Err(GitLabError::Api {
        status: status.as_u16(),
        message,
    })
}

fn format_error_body(body: &ApiErrorBody) -> String {
    match (&body.message, &body.error) {
        (Some(serde_json::Value::String(message)), _) => message.clone(),
        (Some(other), _) => other.to_string(),
        (None, Some(error)) => error.clone(),
        (None, None) => "unknown error".to_string(),
    }
}
