//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::Session;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let signed_in = move || session.with(|s| s.as_ref().is_some_and(Session::is_authenticated));

    view! {
        <section class="home-page">
            <h1>"Find the right provider, faster."</h1>
            <p>"Search affiliated providers and the national registry, then request an appointment in one place."</p>
            <div class="home-page__actions" hidden=signed_in>
                <A href="/register" attr:class="btn btn--primary">"Get started"</A>
                <A href="/login" attr:class="btn">"Log in"</A>
            </div>
            <div class="home-page__actions" hidden=move || !signed_in()>
                <A href="/dashboard" attr:class="btn btn--primary">"Go to dashboard"</A>
            </div>
        </section>
    }
}
