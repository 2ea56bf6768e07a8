//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and API calls and delegates shared
//! rendering to `components`. Pages never gate themselves; `app` wraps them
//! in `ProtectedRoute` or `GuestRoute`.


pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod requests;
pub mod reset_password;
pub mod search;

use leptos::prelude::*;

use crate::net::ApiError;
use crate::session::SessionService;

/// Shown when an authenticated page finds no token at call time.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Drop a session the API no longer accepts. The protected guard then
/// redirects to login. Returns whether the session was dropped.
pub fn expire_on_unauthorized(service: &SessionService, err: &ApiError) -> bool {
    if err.is_unauthorized() {
        leptos::logging::log!("bearer token rejected; signing out");
        service.sign_out();
        true
    } else {
        false
    }
}

/// Message for a failed authenticated call, signing out on 401.
pub fn authed_error_message(service: &SessionService, err: &ApiError) -> String {
    if expire_on_unauthorized(service, err) { SESSION_EXPIRED.to_owned() } else { err.message() }
}

/// Trimmed form value, `None` when blank.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Text input bound to one `String` field of a form struct held in a signal.
pub(crate) fn bound_input<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    placeholder: &'static str,
    kind: &'static str,
    get: fn(&T) -> &String,
    set: fn(&mut T) -> &mut String,
) -> impl IntoView {
    view! {
        <input
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| *set(f) = value);
            }
        />
    }
}
