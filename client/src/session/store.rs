//! Persisted session store: one token key, one JSON profile key.
//!
//! The two writes in `write` are sequential with no transaction; a reader
//! may briefly observe the token without the profile. Reads treat each key
//! independently so a corrupt profile never hides a valid token.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use super::model::{Profile, Session};
use super::storage::{SessionStorage, StorageError};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "medidata.token";
/// Storage key holding the JSON-serialized profile.
pub const PROFILE_KEY: &str = "medidata.profile";

/// Whether a storage key belongs to the session.
pub fn is_session_key(key: &str) -> bool {
    key == TOKEN_KEY || key == PROFILE_KEY
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Read the persisted session. Never fails.
    pub fn read(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let profile = self.storage.get(PROFILE_KEY).and_then(|raw| decode_profile(&raw));
        Session { token, profile }
    }

    /// Persist token then profile.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::EmptyToken` for a blank token without touching
    /// storage. Otherwise returns the first storage failure; either key may
    /// already have landed.
    pub fn write(&self, token: &str, profile: &Profile) -> Result<(), StorageError> {
        if token.trim().is_empty() {
            return Err(StorageError::EmptyToken);
        }
        let encoded = serde_json::to_string(profile).map_err(|e| StorageError::Encode {
            key: PROFILE_KEY.to_owned(),
            reason: e.to_string(),
        })?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(PROFILE_KEY, &encoded)
    }

    /// Replace only the cached profile, keeping the token.
    ///
    /// # Errors
    ///
    /// Returns a storage failure from the underlying backend.
    pub fn write_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(profile).map_err(|e| StorageError::Encode {
            key: PROFILE_KEY.to_owned(),
            reason: e.to_string(),
        })?;
        self.storage.set(PROFILE_KEY, &encoded)
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(PROFILE_KEY);
    }
}

fn decode_profile(raw: &str) -> Option<Profile> {
    match serde_json::from_str::<Profile>(raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            leptos::logging::warn!("ignoring unreadable stored profile: {e}");
            None
        }
    }
}
