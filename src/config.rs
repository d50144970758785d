//! Process configuration resolved once at startup.
//!
//! Environment variable names are private constants here; the rest of the
//! crate receives values through the `Config` struct so tests can inject
//! fake tokens and endpoints.

use thiserror::Error;

const TOKEN: &str = "GITLAB_TOKEN";

/// Base URL of the GitLab v4 REST API.
const DEFAULT_API_BASE: &str = "https://gitlab.com/api/v4";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Set the GITLAB_TOKEN environment variable for this utility to work")]
    MissingToken,
}

/// Settings shared by every operation.
pub struct Config {
    /// Personal access token used to authenticate API calls.
    pub token: String,

    /// API endpoint. Always gitlab.com in production; tests point this at a
    /// local mock server.
    pub api_base: String,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = non_empty_var(TOKEN).ok_or(ConfigError::MissingToken)?;
        Ok(Self {
            token,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }
}
