//! # Reconciliation Core
//!
//! Domain logic for converging a target system's group membership toward the
//! membership derived from an authoritative identity directory.
//!
//! The core is deliberately free of I/O: the directory and the target system
//! are consumed through two narrow traits ([`DirectorySource`] and
//! [`GroupService`]), and per-user observability flows through an injected
//! [`SyncObserver`] rather than a global logger.
//!
//! ## Flow
//!
//! ```text
//! DirectorySource ──► ExpectedMembers ─┐
//!                                      ├─► ReconcilePlan ─► apply_plan
//! GroupService ─────► ActualMembers  ──┘        │
//!                                          guard: refuse to act when the
//!                                          two sets share no usernames
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use glsync_core::{run_sync, AccessLevel, TracingObserver};
//!
//! let outcome = run_sync(
//!     &directory_client,
//!     &gitlab_client,
//!     "my-group",
//!     AccessLevel::Developer,
//!     &TracingObserver,
//! )
//! .await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`types`] - Membership sets, directory accounts, access levels
//! - [`error`] - Error taxonomy (`SyncError`)
//! - [`traits`] - Collaborator traits for the directory and target system
//! - [`plan`] - Set-difference reconciliation plan with the safety guard
//! - [`observer`] - Injected info/warning event sink
//! - [`sync`] - Single-pass orchestration and mutation loop

pub mod error;
pub mod observer;
pub mod plan;
pub mod sync;
pub mod traits;
pub mod types;

pub use error::{SyncError, SyncResult};
pub use observer::{SyncEvent, SyncObserver, TracingObserver};
pub use plan::{Action, ReconcilePlan};
pub use sync::{apply_plan, run_sync, SyncOutcome};
pub use traits::{DirectorySource, GroupService};
pub use types::{
    expected_members, AccessLevel, ActualMembers, DirectoryAccount, ExpectedMembers, GroupHandle,
    GroupMember, MemberId, ParseAccessLevelError, TargetUser, UserId,
};
