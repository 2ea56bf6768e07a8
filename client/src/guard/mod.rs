//! Route gating: decide whether to render a page or redirect.
//!
//! DESIGN
//! ======
//! One guard, parameterized by `GuardPolicy`. `protected` and `guest` differ
//! only in which session state they accept and where they send everyone else.
//! The decision is a pure function of policy and state; the Leptos wrapper in
//! `components::route_guard` owns subscription and navigation.


use crate::session::Session;

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated users land.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    pub require_authenticated: bool,
    pub redirect_to: &'static str,
}

impl GuardPolicy {
    /// Signed-in users only; others go to the login page.
    pub const fn protected() -> Self {
        Self { require_authenticated: true, redirect_to: LOGIN_PATH }
    }

    /// Signed-out users only; others go to the dashboard.
    pub const fn guest() -> Self {
        Self { require_authenticated: false, redirect_to: DASHBOARD_PATH }
    }
}

/// Guard lifecycle: unread until the first store read, then resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Unknown,
    Resolved { authenticated: bool },
}

impl GuardState {
    pub fn from_session(session: &Session) -> Self {
        Self::Resolved { authenticated: session.is_authenticated() }
    }
}

/// What the guard shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Render,
    Redirect(&'static str),
}

pub fn evaluate(policy: GuardPolicy, state: GuardState) -> GuardOutcome {
    match state {
        GuardState::Unknown => GuardOutcome::Loading,
        GuardState::Resolved { authenticated } if authenticated == policy.require_authenticated => {
            GuardOutcome::Render
        }
        GuardState::Resolved { .. } => GuardOutcome::Redirect(policy.redirect_to),
    }
}
