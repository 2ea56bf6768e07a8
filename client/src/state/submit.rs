//! In-progress submission tracking for forms.
//!
//! A page owns one `RwSignal<bool>` per form. `InFlight::begin` claims it and
//! returns a guard that releases the flag when dropped, including on early
//! returns and after the page has been unmounted.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;

pub struct InFlight;

impl InFlight {
    /// Claim `flag`. Returns `None` while another submission holds it.
    #[must_use = "the flag is released as soon as the guard is dropped"]
    pub fn begin(flag: RwSignal<bool>) -> Option<InFlightGuard> {
        if flag.try_get_untracked().unwrap_or(true) {
            return None;
        }
        flag.set(true);
        Some(InFlightGuard { flag })
    }
}

/// Releases its flag on drop.
pub struct InFlightGuard {
    flag: RwSignal<bool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        // Disposed when the page unmounted mid-request.
        let _ = self.flag.try_set(false);
    }
}
