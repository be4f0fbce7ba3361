//! Error types for the directory client.

use thiserror::Error;

/// Result type alias using [`DirectoryError`].
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors that can occur when talking to the Admin Directory API.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service-account authentication error.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Failed to read the service-account key file.
    #[error("Credentials file error: {0}")]
    KeyFile(#[from] std::io::Error),

    /// Directory API returned a non-success status.
    #[error("Directory API error: {status} - {message}")]
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
