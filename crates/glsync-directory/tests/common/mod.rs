//! Common test utilities for glsync-directory integration tests.

use serde_json::{json, Value};

/// Test data factory for a directory user carrying the GitLab attribute.
pub fn create_directory_user(email_prefix: &str, gitlab_username: &str) -> Value {
    json!({
        "primaryEmail": format!("{}@example.com", email_prefix),
        "name": { "fullName": format!("Test {}", email_prefix) },
        "suspended": false,
        "customSchemas": {
            "External_Services": {
                "GitLab_username": gitlab_username
            }
        }
    })
}

/// Test data factory for a directory user without the GitLab attribute.
pub fn create_plain_user(email_prefix: &str) -> Value {
    json!({
        "primaryEmail": format!("{}@example.com", email_prefix),
        "name": { "fullName": format!("Test {}", email_prefix) },
        "suspended": false
    })
}

/// Wraps users in a Directory API listing page.
pub fn create_users_page(users: Vec<Value>, next_page_token: Option<&str>) -> Value {
    let mut page = json!({ "kind": "admin#directory#users", "users": users });
    if let Some(token) = next_page_token {
        page["nextPageToken"] = json!(token);
    }
    page
}

/// A Google API error body.
pub fn create_error_body(code: u16, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "errors": [{ "message": message, "reason": "forbidden" }]
        }
    })
}
