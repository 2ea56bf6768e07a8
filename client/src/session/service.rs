//! Session service provided to the component tree as context.
//!
//! DESIGN
//! ======
//! Writers go through `sign_in` / `sign_out`, which persist first and then
//! signal same-tab subscribers synchronously. A caller that navigates after
//! either call therefore lands on a route whose guard already sees the new
//! state.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::sync::Arc;

use super::channel::{AuthChannel, Subscription};
use super::model::{Profile, Session};
use super::storage::{BrowserStorage, SessionStorage, StorageError};
use super::store::SessionStore;

#[derive(Clone)]
pub struct SessionService {
    store: SessionStore,
    channel: AuthChannel,
}

impl SessionService {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { store: SessionStore::new(storage), channel: AuthChannel::new() }
    }

    /// Service backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    pub fn channel(&self) -> &AuthChannel {
        &self.channel
    }

    pub fn snapshot(&self) -> Session {
        self.store.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    /// Token to attach as `Authorization: Bearer ...`.
    pub fn bearer(&self) -> Option<String> {
        self.snapshot().token
    }

    /// Persist a fresh session and notify subscribers.
    ///
    /// Subscribers are notified even when the write fails so they re-derive
    /// from whatever actually landed.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; the session may be partially written.
    pub fn sign_in(&self, token: &str, profile: &Profile) -> Result<(), StorageError> {
        let result = self.store.write(token, profile);
        if let Err(e) = &result {
            leptos::logging::warn!("session write failed: {e}");
        }
        self.channel.notify();
        result
    }

    /// Replace the cached profile (after a profile edit) and notify.
    ///
    /// # Errors
    ///
    /// Returns the storage failure.
    pub fn refresh_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        let result = self.store.write_profile(profile);
        self.channel.notify();
        result
    }

    /// Drop the local session. No network call is involved.
    pub fn sign_out(&self) {
        self.store.clear();
        self.channel.notify();
    }

    /// Subscribe to session changes. See `AuthChannel::subscribe`.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.channel.subscribe(listener)
    }
}
