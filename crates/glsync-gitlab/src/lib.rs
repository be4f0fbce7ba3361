//! # GitLab group membership client
//!
//! GitLab REST v4 client for glsync, covering the five calls a
//! reconciliation pass needs: group resolution, full membership listing
//! (the `members/all` inherited view, paginated to exhaustion), member
//! removal, exact username lookup, and member addition at a fixed access
//! level.
//!
//! Implements [`glsync_core::GroupService`]. No retries and no rate
//! limiting: failures propagate to the caller untranslated.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::GitlabClient;
pub use config::GitlabConfig;
pub use error::{GitlabError, GitlabResult};
pub use types::{AddMemberRequest, Group, Member, User};
