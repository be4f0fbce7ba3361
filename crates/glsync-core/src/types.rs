//! Membership types shared across the reconciliation pass.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of an existing membership record in the target system.
///
/// Used only to issue a removal; otherwise opaque.
pub type MemberId = i64;

/// Identifier of a user account in the target system.
pub type UserId = i64;

/// Expected membership: target username → directory email.
///
/// Built once per run from the directory; unordered.
pub type ExpectedMembers = HashMap<String, String>;

/// Actual membership: target username → membership identifier.
///
/// Built once per run from the target system; unordered.
pub type ActualMembers = HashMap<String, MemberId>;

/// An active account as returned by the identity directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryAccount {
    /// Target-system username from the directory's custom attribute, if
    /// populated for this account.
    pub username: Option<String>,
    /// Primary email address in the directory.
    pub email: String,
}

/// Resolved handle to the target group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHandle {
    /// Numeric group id in the target system.
    pub id: i64,
    /// Display name, used in observability events.
    pub name: String,
}

/// A current member of the target group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMember {
    /// Username in the target system.
    pub username: String,
    /// Membership identifier used for removal.
    pub id: MemberId,
}

/// A user account found in the target system by username lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetUser {
    /// User account id in the target system.
    pub id: UserId,
    /// Username as reported by the target system.
    pub username: String,
}

/// Privilege tier granted to every newly added member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Read-only visitor.
    Guest,
    /// Can view and comment.
    Reporter,
    /// Can push and merge.
    #[default]
    Developer,
    /// Can manage the project.
    Maintainer,
    /// Full control of the group.
    Owner,
}

impl AccessLevel {
    /// Numeric value used on the wire by the target system.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        match self {
            Self::Guest => 10,
            Self::Reporter => 20,
            Self::Developer => 30,
            Self::Maintainer => 40,
            Self::Owner => 50,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Guest => "guest",
            Self::Reporter => "reporter",
            Self::Developer => "developer",
            Self::Maintainer => "maintainer",
            Self::Owner => "owner",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown access level name.
#[derive(Debug, Error)]
#[error("unknown access level: {0}")]
pub struct ParseAccessLevelError(String);

impl FromStr for AccessLevel {
    type Err = ParseAccessLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "reporter" => Ok(Self::Reporter),
            "developer" => Ok(Self::Developer),
            "maintainer" => Ok(Self::Maintainer),
            "owner" => Ok(Self::Owner),
            other => Err(ParseAccessLevelError(other.to_string())),
        }
    }
}

/// Build the expected membership set from directory accounts.
///
/// Accounts whose target-username attribute is absent or empty are silently
/// excluded; they never appear in the expected set regardless of their other
/// fields.
#[must_use]
pub fn expected_members(accounts: &[DirectoryAccount]) -> ExpectedMembers {
    accounts
        .iter()
        .filter_map(|account| {
            let username = account.username.as_deref()?;
            if username.is_empty() {
                return None;
            }
            Some((username.to_string(), account.email.clone()))
        })
        .collect()
}
