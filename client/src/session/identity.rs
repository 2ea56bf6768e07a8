//! Header identity: which name to show for the signed-in user.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::model::Profile;

/// Shown when nothing better is known.
pub const FALLBACK_NAME: &str = "User";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Full name, then first name, then the local part of the email, then
/// `"User"`.
pub fn display_name(profile: Option<&Profile>) -> String {
    let Some(profile) = profile else {
        return FALLBACK_NAME.to_owned();
    };
    let meta = &profile.user_metadata;
    non_blank(meta.full_name.as_deref())
        .or_else(|| non_blank(meta.first_name.as_deref()))
        .or_else(|| {
            non_blank(profile.email.as_deref())
                .and_then(|email| non_blank(email.split('@').next()))
        })
        .unwrap_or(FALLBACK_NAME)
        .to_owned()
}
