//! Reactive view of the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the header each call `use_session` on mount. The signal
//! stays `None` until the first client-side read so server rendering and the
//! first hydrated frame agree; after that it is re-read on every channel
//! notification until the owning component unmounts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::session::{Session, SessionService};

pub fn use_session() -> RwSignal<Option<Session>> {
    let service = expect_context::<SessionService>();
    let session = RwSignal::new(None::<Session>);

    let reader = service.clone();
    Effect::new(move || {
        session.set(Some(reader.snapshot()));
    });

    let reader = service.clone();
    let subscription = service.subscribe(move || {
        let _ = session.try_set(Some(reader.snapshot()));
    });
    on_cleanup(move || drop(subscription));

    session
}
