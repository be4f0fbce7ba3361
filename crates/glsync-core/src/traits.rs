//! Collaborator traits.
//!
//! The core consumes the identity directory and the target system through
//! these two seams. Implementations live in their own client crates; the
//! core never issues HTTP itself.

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::types::{AccessLevel, DirectoryAccount, GroupHandle, GroupMember, MemberId, TargetUser, UserId};

/// Read access to the authoritative identity directory.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// List every active (non-suspended) directory account.
    ///
    /// Implementations must traverse the directory's full paginated result
    /// set; a single-page truncation would silently shrink the expected
    /// membership and trigger spurious removals.
    async fn list_active_accounts(&self) -> SyncResult<Vec<DirectoryAccount>>;
}

/// Read and mutate access to the group-access-controlled target system.
#[async_trait]
pub trait GroupService: Send + Sync {
    /// Resolve a group identifier (numeric id or path) to a handle.
    async fn get_group(&self, group_id: &str) -> SyncResult<GroupHandle>;

    /// List the group's entire membership.
    ///
    /// Implementations must request the full membership view, paginated to
    /// exhaustion, not a default single page.
    async fn list_all_members(&self, group: &GroupHandle) -> SyncResult<Vec<GroupMember>>;

    /// Remove a member from the group by membership identifier.
    async fn remove_member(&self, group: &GroupHandle, member_id: MemberId) -> SyncResult<()>;

    /// Look up user accounts by exact username.
    ///
    /// May return zero, one, or many results.
    async fn find_users_by_username(&self, username: &str) -> SyncResult<Vec<TargetUser>>;

    /// Add a user to the group at the given access level.
    async fn add_member(
        &self,
        group: &GroupHandle,
        user_id: UserId,
        access_level: AccessLevel,
    ) -> SyncResult<()>;
}
