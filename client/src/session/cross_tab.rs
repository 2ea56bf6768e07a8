//! Bridge from browser `storage` events to the `AuthChannel`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsers deliver `storage` events only to *other* tabs of the same origin.
//! The writing tab signals through `SessionService`; this bridge covers every
//! other tab so their guards and headers re-read the store.

#[cfg(test)]
#[path = "cross_tab_test.rs"]
mod cross_tab_test;

use super::channel::AuthChannel;
use super::store::is_session_key;

/// Whether a `storage` event for `key` should trigger a re-read.
///
/// `None` means the whole storage area was cleared.
pub fn should_forward(key: Option<&str>) -> bool {
    key.map_or(true, is_session_key)
}

/// Listen for cross-tab session changes for the lifetime of the calling
/// reactive owner.
pub fn install(channel: AuthChannel) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{on_cleanup, window_event_listener};

        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            if should_forward(ev.key().as_deref()) {
                channel.notify();
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = channel;
    }
}
