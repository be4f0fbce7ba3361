//! Core error types.
//!
//! The taxonomy distinguishes the one fatal pre-mutation condition (no
//! usernames in common between the two membership sets) from transport
//! failures propagated from the collaborators. Per-item "user not found"
//! conditions are not errors; they surface as warning events instead.

use thiserror::Error;

/// Result type alias using [`SyncError`].
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur during a reconciliation pass.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The expected and actual membership sets share no usernames.
    ///
    /// An empty intersection strongly signals a misconfigured directory
    /// query or attribute mapping; proceeding would remove every existing
    /// member of the group. Raised once, before any mutation is issued.
    #[error(
        "no usernames in common between the directory and the target group \
         ({expected} expected, {actual} current members); refusing to reconcile"
    )]
    NoCommonMembers { expected: usize, actual: usize },

    /// A directory read failed. The underlying client error is preserved
    /// as the source, untranslated and unretried.
    #[error("directory error: {0}")]
    Directory(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A target-system call failed. The underlying client error is
    /// preserved as the source, untranslated and unretried.
    #[error("target system error: {0}")]
    Target(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SyncError {
    /// Wrap a directory client error.
    pub fn directory(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Directory(err.into())
    }

    /// Wrap a target-system client error.
    pub fn target(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Target(err.into())
    }

    /// Whether this error is the pre-mutation safety guard.
    #[must_use]
    pub fn is_guard(&self) -> bool {
        matches!(self, Self::NoCommonMembers { .. })
    }
}
