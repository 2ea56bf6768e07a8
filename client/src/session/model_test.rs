use super::*;

#[test]
fn role_parses_known_values_case_insensitively() {
    assert_eq!("patient".parse::<Role>(), Ok(Role::Patient));
    assert_eq!(" Provider ".parse::<Role>(), Ok(Role::Provider));
    assert!("admin".parse::<Role>().is_err());
}

#[test]
fn role_display_matches_wire_value() {
    assert_eq!(Role::Patient.to_string(), "patient");
    assert_eq!(Role::Provider.as_str(), "provider");
}

#[test]
fn profile_deserializes_auth_user_shape() {
    let raw = serde_json::json!({
        "id": "u-1",
        "email": "ana@x.com",
        "user_metadata": { "first_name": "Ana", "full_name": "Ana Lee", "role": "patient" }
    });
    let profile: Profile = serde_json::from_value(raw).unwrap();
    assert_eq!(profile.id, "u-1");
    assert_eq!(profile.email.as_deref(), Some("ana@x.com"));
    assert_eq!(profile.user_metadata.full_name.as_deref(), Some("Ana Lee"));
    assert_eq!(profile.role(), Some(Role::Patient));
}

#[test]
fn profile_keeps_unknown_fields_verbatim() {
    let raw = serde_json::json!({
        "id": "u-1",
        "email": "a@b.com",
        "user_metadata": { "role": "provider", "email_verified": true },
        "aud": "authenticated"
    });
    let profile: Profile = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
}

#[test]
fn profile_tolerates_missing_metadata() {
    let profile: Profile = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert_eq!(profile.id, "");
    assert_eq!(profile.role(), None);
}

#[test]
fn unknown_role_reads_as_none() {
    let profile: Profile =
        serde_json::from_value(serde_json::json!({ "id": "u", "user_metadata": { "role": "nurse" } })).unwrap();
    assert_eq!(profile.role(), None);
}

#[test]
fn session_without_token_is_logged_out_even_with_profile() {
    let session = Session {
        token: None,
        profile: Some(Profile {
            user_metadata: ProfileMetadata { role: Some("patient".to_owned()), ..ProfileMetadata::default() },
            ..Profile::default()
        }),
    };
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
}
