//! Choose a new password from an emailed recovery link.
//!
//! The link lands here with `#access_token=...&type=recovery`. The token is
//! read from the fragment once on mount; it is never stored.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::register::check_new_password;
use crate::components::route_guard::redirect_options;
use crate::guard::LOGIN_PATH;
use crate::state::submit::InFlight;

const INVALID_LINK: &str = "This reset link is invalid or has expired. Please request a new one.";

fn location_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let location = web_sys::window()?.location();
        location
            .hash()
            .ok()
            .and_then(|hash| crate::net::auth::recovery_token(&hash))
            .or_else(|| location.search().ok().and_then(|query| crate::net::auth::recovery_token(&query)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let token = RwSignal::new(None::<String>);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let found = location_token();
        if found.is_none() {
            error.set(Some(INVALID_LINK.to_owned()));
        }
        token.set(found);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(access_token) = token.get() else {
            error.set(Some(INVALID_LINK.to_owned()));
            return;
        };
        let new_password = password.get();
        if let Err(reason) = check_new_password(&new_password, &confirm.get()) {
            error.set(Some(reason.to_owned()));
            return;
        }
        let Some(guard) = InFlight::begin(busy) else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            let _guard = guard;
            match crate::net::auth::reset_password(&access_token, &new_password).await {
                Ok(message) => {
                    let _ = done.try_set(Some(message));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.message()));
                }
            }
        });
    };

    let on_continue = move |_| navigate(LOGIN_PATH, redirect_options());

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit hidden=move || done.with(Option::is_some)>
                <h1>"Choose a new password"</h1>
                <input
                    type="password"
                    placeholder="New password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm new password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get() || token.with(Option::is_none)>
                    "Update password"
                </button>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <p class="auth-form__links">
                    <A href="/forgot-password">"Request a new link"</A>
                </p>
            </form>
            <div class="auth-form" hidden=move || done.with(Option::is_none)>
                <p class="form-info">{move || done.get().unwrap_or_default()}</p>
                <button class="btn btn--primary" on:click=on_continue>"Continue to login"</button>
            </div>
        </div>
    }
}
