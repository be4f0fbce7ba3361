//! Common test utilities for glsync-gitlab integration tests.

use serde_json::{json, Value};

/// Test data factory for a GitLab group.
pub fn create_group(id: i64, name: &str, full_path: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "path": name.to_lowercase(),
        "full_path": full_path,
        "visibility": "private"
    })
}

/// Test data factory for a group member.
pub fn create_member(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "name": format!("User {}", username),
        "state": "active",
        "access_level": 30
    })
}

/// Test data factory for a user lookup result.
pub fn create_user(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "name": format!("User {}", username),
        "state": "active"
    })
}
