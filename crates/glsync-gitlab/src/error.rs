//! Error types for the GitLab client.

use thiserror::Error;

/// Result type alias using [`GitlabError`].
pub type GitlabResult<T> = Result<T, GitlabError>;

/// Errors that can occur when talking to the GitLab REST API.
#[derive(Debug, Error)]
pub enum GitlabError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// GitLab returned a non-success status.
    #[error("GitLab API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}
