//! # Google Workspace Directory client
//!
//! Read-only Admin SDK Directory API client for glsync. Lists every active
//! (non-suspended) account in a Workspace customer scope, paginated to
//! exhaustion, and extracts the target-system username from a custom schema
//! attribute (`External_Services.GitLab_username` by default).
//!
//! Authentication uses a service account with domain-wide delegation,
//! impersonating a Workspace administrator via the JWT-bearer grant; a
//! pre-acquired bearer token can be supplied instead (used in tests).
//!
//! Implements [`glsync_core::DirectorySource`]: accounts without the custom
//! attribute still appear in the listing with `username: None` and are
//! filtered out by the core when it builds the expected membership.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;

pub use auth::{DirectoryCredentials, ServiceAccountKey, TokenCache, DIRECTORY_READONLY_SCOPE};
pub use client::{DirectoryClient, DirectoryUser, UsersPage};
pub use config::DirectoryConfig;
pub use error::{DirectoryError, DirectoryResult};
