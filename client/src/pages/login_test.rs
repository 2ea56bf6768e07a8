use super::*;

#[test]
fn credentials_are_trimmed() {
    assert_eq!(
        validate_credentials("  a@b.com ", "secret"),
        Ok(("a@b.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn missing_fields_are_rejected() {
    assert_eq!(validate_credentials("", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn password_is_not_trimmed() {
    assert_eq!(validate_credentials("a@b.com", " pw ").map(|(_, p)| p), Ok(" pw ".to_owned()));
}

#[test]
fn email_shape() {
    assert!(looks_like_email("a@b.com"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("a@b."));
    assert!(!looks_like_email("ab.com"));
    assert_eq!(validate_credentials("nope", "pw"), Err("Enter a valid email address."));
}
