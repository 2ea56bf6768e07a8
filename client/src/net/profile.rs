//! Account profile endpoints (`/api/profile`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::http::ApiError;
use super::types::AccountProfile;
use crate::session::{Profile, Role};

pub const PROFILE_PATH: &str = "/api/profile";

/// Diff `edited` against `current`; only changed, non-blank fields are sent.
/// Provider-only fields are dropped for patients.
pub fn profile_changes(current: &AccountProfile, edited: &AccountProfile, role: Option<Role>) -> AccountProfile {
    fn changed(before: Option<&String>, after: Option<&String>) -> Option<String> {
        let after = after.map(|v| v.trim()).filter(|v| !v.is_empty())?;
        (before.map(|v| v.trim()) != Some(after)).then(|| after.to_owned())
    }
    let is_provider = role == Some(Role::Provider);
    AccountProfile {
        role: None,
        email: None,
        first_name: changed(current.first_name.as_ref(), edited.first_name.as_ref()),
        last_name: changed(current.last_name.as_ref(), edited.last_name.as_ref()),
        phone_num: changed(current.phone_num.as_ref(), edited.phone_num.as_ref()),
        gender: changed(current.gender.as_ref(), edited.gender.as_ref()),
        state: changed(current.state.as_ref(), edited.state.as_ref()),
        city: changed(current.city.as_ref(), edited.city.as_ref()),
        insurance: changed(current.insurance.as_ref(), edited.insurance.as_ref()),
        location: changed(current.location.as_ref(), edited.location.as_ref()).filter(|_| is_provider),
        taxonomy: changed(current.taxonomy.as_ref(), edited.taxonomy.as_ref()).filter(|_| is_provider),
    }
}

/// Fold edited names back into the cached session profile so the header
/// reflects them without a fresh login.
pub fn apply_to_session_profile(cached: &Profile, account: &AccountProfile) -> Profile {
    let mut next = cached.clone();
    let meta = &mut next.user_metadata;
    if let Some(first) = account.first_name.as_ref() {
        meta.first_name = Some(first.clone());
    }
    if let Some(last) = account.last_name.as_ref() {
        meta.last_name = Some(last.clone());
    }
    if account.first_name.is_some() || account.last_name.is_some() {
        let full = [meta.first_name.as_deref(), meta.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        meta.full_name = (!full.is_empty()).then_some(full);
    }
    next
}

/// `GET /api/profile`.
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn fetch_profile(token: &str) -> Result<AccountProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::get(&crate::config::api_url(PROFILE_PATH)),
            token,
        )
        .build();
        super::http::send_json::<AccountProfile>(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/profile` with only the changed fields.
///
/// # Errors
///
/// Returns `ApiError`; 404 when no profile row exists yet.
pub async fn update_profile(token: &str, changes: &AccountProfile) -> Result<AccountProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::put(&crate::config::api_url(PROFILE_PATH)),
            token,
        )
        .json(changes);
        super::http::send_json::<AccountProfile>(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, changes);
        Err(ApiError::Unavailable)
    }
}
