//! GitLab API data models.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A GitLab project, as returned by the projects API.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u64,
    pub path_with_namespace: String,
}

/// A GitLab issue. `iid` is the per-project issue number users see.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub iid: u64,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    pub web_url: String,
    pub created_at: DateTime<Utc>,
}
