use super::*;
use crate::session::ProfileMetadata;

fn account(first: &str, city: &str) -> AccountProfile {
    AccountProfile {
        first_name: Some(first.to_owned()),
        city: Some(city.to_owned()),
        ..AccountProfile::default()
    }
}

#[test]
fn only_changed_fields_are_sent() {
    let current = account("Old", "Old City");
    let edited = AccountProfile { insurance: Some("Plan X".to_owned()), ..account("New", "Old City") };
    let changes = profile_changes(&current, &edited, Some(Role::Patient));
    assert_eq!(
        changes,
        AccountProfile {
            first_name: Some("New".to_owned()),
            insurance: Some("Plan X".to_owned()),
            ..AccountProfile::default()
        }
    );
}

#[test]
fn blank_edits_are_not_sent() {
    let current = account("Pat", "Urbana");
    let edited = account("  ", "Urbana");
    assert_eq!(profile_changes(&current, &edited, Some(Role::Patient)), AccountProfile::default());
}

#[test]
fn provider_fields_only_for_providers() {
    let current = AccountProfile::default();
    let edited = AccountProfile {
        location: Some("New Clinic".to_owned()),
        taxonomy: Some("Cardiology".to_owned()),
        ..AccountProfile::default()
    };
    let as_patient = profile_changes(&current, &edited, Some(Role::Patient));
    assert_eq!(as_patient.location, None);
    let as_provider = profile_changes(&current, &edited, Some(Role::Provider));
    assert_eq!(as_provider.location.as_deref(), Some("New Clinic"));
    assert_eq!(as_provider.taxonomy.as_deref(), Some("Cardiology"));
}

#[test]
fn session_profile_picks_up_new_names() {
    let cached = Profile {
        id: "u-1".to_owned(),
        email: Some("a@b.com".to_owned()),
        user_metadata: ProfileMetadata {
            first_name: Some("Old".to_owned()),
            last_name: Some("Name".to_owned()),
            full_name: Some("Old Name".to_owned()),
            role: Some("patient".to_owned()),
            ..ProfileMetadata::default()
        },
        ..Profile::default()
    };
    let account = AccountProfile { first_name: Some("New".to_owned()), ..AccountProfile::default() };
    let next = apply_to_session_profile(&cached, &account);
    assert_eq!(next.user_metadata.full_name.as_deref(), Some("New Name"));
    assert_eq!(next.user_metadata.role.as_deref(), Some("patient"));
    assert_eq!(next.id, "u-1");
}

#[test]
fn session_profile_unchanged_without_names() {
    let cached = Profile::default();
    let account = AccountProfile { city: Some("Urbana".to_owned()), ..AccountProfile::default() };
    assert_eq!(apply_to_session_profile(&cached, &account), cached);
}
