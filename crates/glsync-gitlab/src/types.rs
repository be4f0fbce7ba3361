//! GitLab API payload types, reduced to the fields the reconciliation uses.

use serde::{Deserialize, Serialize};

/// A GitLab group.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub full_path: String,
}

/// A group member, from the `members/all` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    /// User id; doubles as the membership identifier for removal.
    pub id: i64,
    pub username: String,
}

/// A user account from the `/users?username=` lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Request body for adding a group member.
#[derive(Debug, Clone, Serialize)]
pub struct AddMemberRequest {
    pub user_id: i64,
    pub access_level: u32,
}
