//! Account profile view and edit.
//!
//! Saving sends only changed fields. When the name changes, the cached
//! session profile is refreshed too so the header updates immediately.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use super::{authed_error_message, bound_input};
use crate::net::profile::{apply_to_session_profile, profile_changes};
use crate::net::types::AccountProfile;
use crate::session::{Role, SessionService};
use crate::state::submit::InFlight;

/// Editable string view of an `AccountProfile`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
    pub gender: String,
    pub state: String,
    pub city: String,
    pub insurance: String,
    pub location: String,
    pub taxonomy: String,
}

impl ProfileForm {
    pub fn from_account(account: &AccountProfile) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            first_name: text(&account.first_name),
            last_name: text(&account.last_name),
            phone_num: text(&account.phone_num),
            gender: text(&account.gender),
            state: text(&account.state),
            city: text(&account.city),
            insurance: text(&account.insurance),
            location: text(&account.location),
            taxonomy: text(&account.taxonomy),
        }
    }

    pub fn to_account(&self) -> AccountProfile {
        AccountProfile {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            phone_num: Some(self.phone_num.clone()),
            gender: Some(self.gender.clone()),
            state: Some(self.state.trim().to_ascii_uppercase()),
            city: Some(self.city.clone()),
            insurance: Some(self.insurance.clone()),
            location: Some(self.location.clone()),
            taxonomy: Some(self.taxonomy.clone()),
            ..AccountProfile::default()
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let service = expect_context::<SessionService>();
    let role = service.snapshot().role();
    let is_provider = role == Some(Role::Provider);

    let current = RwSignal::new(None::<AccountProfile>);
    let form = RwSignal::new(ProfileForm::default());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let loader = service.clone();
    Effect::new(move || {
        let Some(token) = loader.bearer() else {
            return;
        };
        let service = loader.clone();
        leptos::task::spawn_local(async move {
            match crate::net::profile::fetch_profile(&token).await {
                Ok(account) => {
                    let _ = form.try_set(ProfileForm::from_account(&account));
                    let _ = current.try_set(Some(account));
                }
                Err(e) if e.status() == Some(404) => {
                    let _ = current.try_set(Some(AccountProfile::default()));
                    let _ = info.try_set(Some("No profile details saved yet.".to_owned()));
                }
                Err(e) => {
                    let _ = error.try_set(Some(authed_error_message(&service, &e)));
                }
            }
        });
    });

    let saver = service.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(before) = current.get() else {
            return;
        };
        let changes = profile_changes(&before, &form.get().to_account(), role);
        if changes == AccountProfile::default() {
            info.set(Some("No changes to save.".to_owned()));
            return;
        }
        let Some(token) = saver.bearer() else {
            return;
        };
        let Some(guard) = InFlight::begin(busy) else {
            return;
        };
        error.set(None);
        info.set(None);
        let service = saver.clone();
        leptos::task::spawn_local(async move {
            let _guard = guard;
            match crate::net::profile::update_profile(&token, &changes).await {
                Ok(updated) => {
                    if let Some(cached) = service.snapshot().profile {
                        let refreshed = apply_to_session_profile(&cached, &changes);
                        if let Err(e) = service.refresh_profile(&refreshed) {
                            leptos::logging::warn!("cached profile refresh failed: {e}");
                        }
                    }
                    let _ = form.try_set(ProfileForm::from_account(&updated));
                    let _ = current.try_set(Some(updated));
                    let _ = info.try_set(Some("Profile updated.".to_owned()));
                }
                Err(e) => {
                    let _ = error.try_set(Some(authed_error_message(&service, &e)));
                }
            }
        });
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            <p class="profile-page__email">{move || current.with(|c| c.as_ref().and_then(|c| c.email.clone()))}</p>
            <form class="profile-page__form" on:submit=on_save>
                {bound_input(form, "First name", "text", |f| &f.first_name, |f| &mut f.first_name)}
                {bound_input(form, "Last name", "text", |f| &f.last_name, |f| &mut f.last_name)}
                {bound_input(form, "Phone", "tel", |f| &f.phone_num, |f| &mut f.phone_num)}
                {bound_input(form, "Gender", "text", |f| &f.gender, |f| &mut f.gender)}
                {bound_input(form, "City", "text", |f| &f.city, |f| &mut f.city)}
                {bound_input(form, "State", "text", |f| &f.state, |f| &mut f.state)}
                <div hidden=is_provider>
                    {bound_input(form, "Insurance", "text", |f| &f.insurance, |f| &mut f.insurance)}
                </div>
                <div hidden=!is_provider>
                    {bound_input(form, "Practice location", "text", |f| &f.location, |f| &mut f.location)}
                    {bound_input(form, "Specialty", "text", |f| &f.taxonomy, |f| &mut f.taxonomy)}
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get() || current.with(Option::is_none)>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || info.get().map(|m| view! { <p class="form-info">{m}</p> })}
        </div>
    }
}
