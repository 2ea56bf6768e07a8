//! Login page: email + password, with a resend-verification affordance for
//! unconfirmed accounts.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::redirect_options;
use crate::guard::DASHBOARD_PATH;
use crate::net::auth::{AuthFailure, AuthFailureKind};
use crate::session::SessionService;
use crate::state::submit::InFlight;

/// Trimmed email and raw password, or the first problem with them.
///
/// # Errors
///
/// Returns a user-facing message for a missing or malformed field.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Cheap shape check; the API does real validation.
pub fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let service = expect_context::<SessionService>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let failure = RwSignal::new(None::<AuthFailure>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let resending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(reason) => {
                failure.set(Some(AuthFailure {
                    kind: AuthFailureKind::Rejected,
                    message: reason.to_owned(),
                }));
                return;
            }
        };
        let Some(guard) = InFlight::begin(busy) else {
            return;
        };
        failure.set(None);
        info.set(None);

        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let _guard = guard;
            match crate::net::auth::login(&email_value, &password_value).await {
                Ok(resp) if resp.access_token.is_empty() => {
                    let _ = info.try_set(Some("Check your email to verify your address, then log in.".to_owned()));
                }
                Ok(resp) => match service.sign_in(&resp.access_token, &resp.user) {
                    Ok(()) => navigate(DASHBOARD_PATH, redirect_options()),
                    Err(e) => {
                        let _ = info.try_set(Some(format!("Could not save your session: {e}")));
                    }
                },
                Err(e) => {
                    let _ = failure.try_set(Some(e));
                }
            }
        });
    };

    let on_resend = move |_| {
        let email_value = email.get().trim().to_owned();
        if !looks_like_email(&email_value) {
            info.set(Some("Enter your email address first.".to_owned()));
            return;
        }
        let Some(guard) = InFlight::begin(resending) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let _guard = guard;
            let message = match crate::net::auth::resend_verification(&email_value).await {
                Ok(message) if !message.is_empty() => message,
                Ok(_) => "Verification email sent.".to_owned(),
                Err(e) => e.message(),
            };
            let _ = info.try_set(Some(message));
        });
    };

    let offers_resend = move || failure.with(|f| f.as_ref().is_some_and(AuthFailure::offers_resend));

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Log in"</h1>
                <input
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
                {move || failure.get().map(|f| view! { <p class="form-error">{f.message}</p> })}
                <button
                    class="btn auth-form__resend"
                    type="button"
                    hidden=move || !offers_resend()
                    disabled=move || resending.get()
                    on:click=on_resend
                >
                    "Resend verification email"
                </button>
                {move || info.get().map(|m| view! { <p class="form-info">{m}</p> })}
                <p class="auth-form__links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    " "
                    <A href="/register">"Create an account"</A>
                </p>
            </form>
        </div>
    }
}
