//! Set-difference reconciliation plan.
//!
//! Compares the expected membership (from the directory) with the actual
//! membership (from the target group) and decides which usernames to remove
//! and which to add. The safety guard lives here: a plan is never produced
//! when the two sets share no usernames.

use std::collections::HashSet;

use crate::error::{SyncError, SyncResult};
use crate::types::{ActualMembers, ExpectedMembers};

/// A single reconciliation action. Ephemeral; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Remove the member holding this username from the group.
    Remove { username: String },
    /// Add the user holding this username to the group.
    Add { username: String },
}

/// The ordered outcome of diffing expected against actual membership.
///
/// Iteration order within `to_remove` and `to_add` is unspecified (hash-set
/// difference); the only ordering guarantee is that all removals are applied
/// before any addition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Usernames present in the group but not in the directory.
    pub to_remove: Vec<String>,
    /// Usernames present in the directory but not in the group.
    pub to_add: Vec<String>,
}

impl ReconcilePlan {
    /// Diff the two membership sets.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NoCommonMembers`] when no username appears in
    /// both sets, however non-empty the differences are. The check runs
    /// exactly once, before any mutation loop; an empty intersection almost
    /// always means a misconfigured directory query, and acting on it would
    /// strip the group of every existing member.
    pub fn compute(expected: &ExpectedMembers, actual: &ActualMembers) -> SyncResult<Self> {
        let expected_keys: HashSet<&str> = expected.keys().map(String::as_str).collect();
        let actual_keys: HashSet<&str> = actual.keys().map(String::as_str).collect();

        if expected_keys.is_disjoint(&actual_keys) {
            return Err(SyncError::NoCommonMembers {
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        let to_remove = actual_keys
            .difference(&expected_keys)
            .map(|s| (*s).to_string())
            .collect();
        let to_add = expected_keys
            .difference(&actual_keys)
            .map(|s| (*s).to_string())
            .collect();

        Ok(Self { to_remove, to_add })
    }

    /// Whether the two sets already agree.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.to_remove.is_empty() && self.to_add.is_empty()
    }

    /// The plan as a flat action list, removals first.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.to_remove
            .iter()
            .map(|username| Action::Remove {
                username: username.clone(),
            })
            .chain(self.to_add.iter().map(|username| Action::Add {
                username: username.clone(),
            }))
            .collect()
    }
}
