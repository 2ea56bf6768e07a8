//! Site header: identity, role-aware navigation, logout.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::redirect_options;
use crate::guard::LOGIN_PATH;
use crate::session::identity::display_name;
use crate::session::{Role, Session, SessionService};
use crate::state::session::use_session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

/// Links for the current session. Unread sessions get no links so the
/// server render and first client frame match.
pub fn nav_links(session: Option<&Session>) -> Vec<NavLink> {
    let Some(session) = session else {
        return Vec::new();
    };
    if !session.is_authenticated() {
        return vec![link("/login", "Login"), link("/register", "Register")];
    }
    let mut links = vec![link("/dashboard", "Dashboard")];
    if session.role() == Some(Role::Patient) {
        links.push(link("/search", "Find Providers"));
    }
    links.push(link("/requests", "Requests"));
    links.push(link("/profile", "Profile"));
    links
}

/// Drop the local session, then leave for the login page without keeping
/// the signed-in page in history.
pub fn sign_out_and_leave(service: &SessionService, navigate: impl Fn(&str, NavigateOptions)) {
    service.sign_out();
    navigate(LOGIN_PATH, redirect_options());
}

#[component]
pub fn Header() -> impl IntoView {
    let service = expect_context::<SessionService>();
    let session = use_session();
    let navigate = use_navigate();

    let signed_in = move || session.with(|s| s.as_ref().is_some_and(Session::is_authenticated));
    let name = move || session.with(|s| display_name(s.as_ref().and_then(|s| s.profile.as_ref())));

    let on_logout = move |_| sign_out_and_leave(&service, &navigate);

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">"MediData"</A>
            <nav class="site-header__nav">
                {move || {
                    session
                        .with(|s| nav_links(s.as_ref()))
                        .into_iter()
                        .map(|l| view! { <A href=l.href attr:class="site-header__link">{l.label}</A> })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <span class="site-header__user" hidden=move || !signed_in()>{name}</span>
            <button class="btn site-header__logout" hidden=move || !signed_in() on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
