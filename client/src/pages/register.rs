//! Registration page for patients and providers.
//!
//! DESIGN
//! ======
//! Form input is collected into a plain `RegisterForm` and validated by
//! `RegisterForm::build` before any request is made. A registration that
//! returns no token (email confirmation pending) leaves the user signed out
//! with an explanatory message.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::login::looks_like_email;
use super::{bound_input, non_blank};
use crate::components::route_guard::redirect_options;
use crate::guard::DASHBOARD_PATH;
use crate::net::auth::RegisterOutcome;
use crate::net::types::RegisterRequest;
use crate::session::{Role, SessionService};
use crate::state::submit::InFlight;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
    pub gender: String,
    pub state: String,
    pub city: String,
    pub insurance: String,
    pub location: String,
    pub taxonomy: String,
    pub provider_email: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            role: Role::Patient,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_num: String::new(),
            gender: String::new(),
            state: String::new(),
            city: String::new(),
            insurance: String::new(),
            location: String::new(),
            taxonomy: String::new(),
            provider_email: String::new(),
        }
    }
}

/// Shared password rule for registration and reset.
///
/// # Errors
///
/// Returns a user-facing message when the password is too short or the
/// confirmation differs.
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

impl RegisterForm {
    /// Validate and convert into the request body.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, as a user-facing message.
    pub fn build(&self) -> Result<RegisterRequest, &'static str> {
        let first_name = non_blank(&self.first_name).ok_or("Enter your first name.")?;
        let last_name = non_blank(&self.last_name).ok_or("Enter your last name.")?;
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err("Enter a valid email address.");
        }
        check_new_password(&self.password, &self.confirm_password)?;

        let is_provider = self.role == Role::Provider;
        let provider_email = if is_provider { non_blank(&self.provider_email) } else { None };
        if provider_email.as_deref().is_some_and(|e| !looks_like_email(e)) {
            return Err("Enter a valid practice email address.");
        }
        Ok(RegisterRequest {
            email: email.to_owned(),
            password: self.password.clone(),
            first_name,
            last_name,
            role: self.role.as_str().to_owned(),
            phone_num: non_blank(&self.phone_num),
            gender: non_blank(&self.gender),
            state: non_blank(&self.state).map(|s| s.to_ascii_uppercase()),
            city: non_blank(&self.city),
            insurance: if is_provider { None } else { non_blank(&self.insurance) },
            location: if is_provider { non_blank(&self.location) } else { None },
            taxonomy: if is_provider { non_blank(&self.taxonomy) } else { None },
            provider_email,
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let service = expect_context::<SessionService>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with(RegisterForm::build) {
            Ok(request) => request,
            Err(reason) => {
                error.set(Some(reason.to_owned()));
                return;
            }
        };
        let Some(guard) = InFlight::begin(busy) else {
            return;
        };
        error.set(None);
        info.set(None);

        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let _guard = guard;
            match crate::net::auth::register(&request).await {
                Ok(RegisterOutcome::SignedIn(resp)) => match service.sign_in(&resp.access_token, &resp.user) {
                    Ok(()) => navigate(DASHBOARD_PATH, redirect_options()),
                    Err(e) => {
                        let _ = error.try_set(Some(format!("Could not save your session: {e}")));
                    }
                },
                Ok(RegisterOutcome::VerificationPending { message }) => {
                    let _ = info.try_set(Some(message));
                    let _ = form.try_set(RegisterForm::default());
                }
                Err(failure) => {
                    let _ = error.try_set(Some(failure.message));
                }
            }
        });
    };

    let is_provider = move || form.with(|f| f.role == Role::Provider);

    view! {
        <div class="auth-page">
            <form class="auth-form auth-form--wide" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <select
                    prop:value=move || form.with(|f| f.role.as_str().to_owned())
                    on:change=move |ev| {
                        let role = event_target_value(&ev).parse().unwrap_or(Role::Patient);
                        form.update(|f| f.role = role);
                    }
                >
                    <option value="patient">"I am a patient"</option>
                    <option value="provider">"I am a provider"</option>
                </select>
                {bound_input(form, "First name", "text", |f| &f.first_name, |f| &mut f.first_name)}
                {bound_input(form, "Last name", "text", |f| &f.last_name, |f| &mut f.last_name)}
                {bound_input(form, "you@example.com", "email", |f| &f.email, |f| &mut f.email)}
                {bound_input(form, "Password", "password", |f| &f.password, |f| &mut f.password)}
                {bound_input(form, "Confirm password", "password", |f| &f.confirm_password, |f| &mut f.confirm_password)}
                {bound_input(form, "Phone (optional)", "tel", |f| &f.phone_num, |f| &mut f.phone_num)}
                {bound_input(form, "Gender (optional)", "text", |f| &f.gender, |f| &mut f.gender)}
                {bound_input(form, "City", "text", |f| &f.city, |f| &mut f.city)}
                {bound_input(form, "State (e.g. IL)", "text", |f| &f.state, |f| &mut f.state)}
                <div hidden=is_provider>
                    {bound_input(form, "Insurance (optional)", "text", |f| &f.insurance, |f| &mut f.insurance)}
                </div>
                <div hidden=move || !is_provider()>
                    {bound_input(form, "Practice location", "text", |f| &f.location, |f| &mut f.location)}
                    {bound_input(form, "Specialty", "text", |f| &f.taxonomy, |f| &mut f.taxonomy)}
                    {bound_input(form, "Practice email (optional)", "email", |f| &f.provider_email, |f| &mut f.provider_email)}
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || info.get().map(|m| view! { <p class="form-info">{m}</p> })}
                <p class="auth-form__links">
                    "Already registered? "
                    <A href="/login">"Log in"</A>
                </p>
            </form>
        </div>
    }
}
