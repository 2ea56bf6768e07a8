//! Session and profile records as persisted in browser storage.
//!
//! DESIGN
//! ======
//! `Profile` mirrors the `user` object returned by the auth endpoints and is
//! stored verbatim; unknown keys are carried in `extra` so a write/read cycle
//! never drops server data.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role carried in profile metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Patient,
    Provider,
}

impl Role {
    /// Wire value used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(Self::Patient),
            "provider" => Ok(Self::Provider),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Display-name and role fields kept under `user_metadata`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The user record returned by `/api/auth/login` and `/api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: ProfileMetadata,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    /// Parsed role, or `None` when absent or unrecognized.
    pub fn role(&self) -> Option<Role> {
        self.user_metadata.role.as_deref().and_then(|r| r.parse().ok())
    }
}

/// Snapshot of the persisted session.
///
/// A missing token means logged out, whatever `profile` holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub profile: Option<Profile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated() {
            return None;
        }
        self.profile.as_ref().and_then(Profile::role)
    }
}
