//! Environment-driven configuration.
//!
//! The five required inputs mirror the collaborators: a service-account key
//! file, the Workspace administrator to impersonate, the customer scope,
//! a GitLab token, and the target group.

use std::env;

use thiserror::Error;

use glsync_core::AccessLevel;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable holds an unusable value.
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Process configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Path to the Google service-account JSON key file.
    pub google_credentials_path: String,
    /// Workspace administrator email the service account impersonates.
    pub google_administrator_email: String,
    /// Workspace customer id.
    pub google_customer_id: String,
    /// GitLab private/personal access token.
    pub gitlab_token: String,
    /// Target group: numeric id or full path.
    pub gitlab_group: String,
    /// GitLab instance base URL.
    pub gitlab_url: Option<String>,
    /// Access level granted to newly added members.
    pub access_level: AccessLevel,
}

impl SyncConfig {
    /// Load configuration from `GLSYNC_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            google_credentials_path: required("GLSYNC_GOOGLE_CREDENTIALS")?,
            google_administrator_email: required("GLSYNC_GOOGLE_ADMIN_EMAIL")?,
            google_customer_id: required("GLSYNC_GOOGLE_CUSTOMER_ID")?,
            gitlab_token: required("GLSYNC_GITLAB_TOKEN")?,
            gitlab_group: required("GLSYNC_GITLAB_GROUP")?,
            gitlab_url: env::var("GLSYNC_GITLAB_URL").ok(),
            access_level: match env::var("GLSYNC_ACCESS_LEVEL") {
                Ok(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                    var: "GLSYNC_ACCESS_LEVEL",
                    message: format!("{e}"),
                })?,
                Err(_) => AccessLevel::default(),
            },
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}
