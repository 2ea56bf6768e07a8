//! Route-level access gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page except the landing page and the 404 view is wrapped in
//! either `ProtectedRoute` or `GuestRoute`. Both delegate to `route_guard`,
//! which follows the session signal and navigates with history replacement
//! so the back button never returns to a gated page.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::{GuardOutcome, GuardPolicy, GuardState, evaluate};
use crate::session::Session;
use crate::state::session::use_session;

/// Navigation options for guard redirects.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

pub fn guard_state(session: Option<&Session>) -> GuardState {
    session.map_or(GuardState::Unknown, GuardState::from_session)
}

/// Signed-in users only.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    route_guard(GuardPolicy::protected(), children)
}

/// Signed-out users only (login, registration, password recovery).
#[component]
pub fn GuestRoute(children: ChildrenFn) -> impl IntoView {
    route_guard(GuardPolicy::guest(), children)
}

fn route_guard(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let outcome = Memo::new(move |_| session.with(|s| evaluate(policy, guard_state(s.as_ref()))));

    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = outcome.get() {
            navigate(path, redirect_options());
        }
    });

    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Loading | GuardOutcome::Redirect(_) => {
            view! { <div class="route-guard__pending" aria-busy="true">"Loading..."</div> }.into_any()
        }
    }
}
