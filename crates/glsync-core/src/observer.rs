//! Injected observability sink.
//!
//! Per-user reconciliation events flow through [`SyncObserver`] rather than
//! a process-global logger, so callers (and tests) decide where they go.

use crate::types::AccessLevel;

/// A per-user event emitted while applying a reconciliation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A member with no corresponding directory entry was removed.
    MemberRemoved {
        username: String,
        group: String,
    },
    /// A directory-expected user was added to the group.
    MemberAdded {
        username: String,
        group: String,
        /// Directory email the membership derives from.
        email: String,
        access_level: AccessLevel,
    },
    /// A directory-expected user does not exist in the target system; the
    /// addition was skipped.
    UserNotFound {
        username: String,
        /// Directory email the membership would have derived from.
        email: String,
    },
}

/// Sink for reconciliation events.
pub trait SyncObserver: Send + Sync {
    /// An informational event: a mutation that was carried out.
    fn info(&self, event: &SyncEvent);

    /// A warning event: an action that was skipped.
    fn warning(&self, event: &SyncEvent);
}

/// Production observer emitting structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn info(&self, event: &SyncEvent) {
        match event {
            SyncEvent::MemberRemoved { username, group } => {
                tracing::info!(
                    username = %username,
                    group = %group,
                    "removing member with no corresponding directory entry"
                );
            }
            SyncEvent::MemberAdded {
                username,
                group,
                email,
                access_level,
            } => {
                tracing::info!(
                    username = %username,
                    group = %group,
                    email = %email,
                    access_level = %access_level,
                    "adding member expected by the directory"
                );
            }
            SyncEvent::UserNotFound { username, email } => {
                tracing::info!(username = %username, email = %email, "user not found");
            }
        }
    }

    fn warning(&self, event: &SyncEvent) {
        match event {
            SyncEvent::UserNotFound { username, email } => {
                tracing::warn!(
                    username = %username,
                    email = %email,
                    "directory user was not found in the target system; skipping addition"
                );
            }
            other => {
                tracing::warn!(event = ?other, "reconciliation warning");
            }
        }
    }
}
