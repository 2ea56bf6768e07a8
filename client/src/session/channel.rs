//! Same-tab broadcast of "the session may have changed, re-read it".
//!
//! DESIGN
//! ======
//! Every live subscriber receives every signal; this is fan-out, not a queue.
//! Dispatch is synchronous: when `notify` returns, each listener registered
//! before the call has run exactly once. Listeners are invoked outside the
//! registry lock, so a listener may subscribe or drop subscriptions while
//! being notified. Listeners added mid-dispatch wait for the next signal;
//! listeners removed mid-dispatch are skipped.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl Registry {
    fn is_live(&self, id: u64) -> bool {
        self.listeners
            .lock()
            .map_or(false, |listeners| listeners.iter().any(|(lid, _)| *lid == id))
    }

    fn remove(&self, id: u64) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(lid, _)| *lid != id);
        }
    }
}

/// Broadcast channel for auth-change signals.
#[derive(Clone, Default)]
pub struct AuthChannel {
    registry: Arc<Registry>,
}

impl fmt::Debug for AuthChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl AuthChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered until the returned
    /// `Subscription` is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.registry.listeners.lock() {
            listeners.push((id, Arc::new(listener)));
        }
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Invoke every live listener once, in subscription order.
    pub fn notify(&self) {
        let snapshot: Vec<(u64, Listener)> = match self.registry.listeners.lock() {
            Ok(listeners) => listeners.clone(),
            Err(_) => return,
        };
        for (id, listener) in snapshot {
            if self.registry.is_live(id) {
                listener();
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.listeners.lock().map_or(0, |listeners| listeners.len())
    }
}

/// Handle for one registered listener; unsubscribes on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}
