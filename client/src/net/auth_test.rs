use super::*;
use crate::net::http::status_error;
use crate::session::Profile;

#[test]
fn forbidden_login_is_email_unverified_and_offers_resend() {
    let err = status_error(
        403,
        r#"{"detail":"Email not verified. Please check your inbox or request a new verification email."}"#,
    );
    let failure = AuthFailure::from_api(&err);
    assert_eq!(failure.kind, AuthFailureKind::EmailUnverified);
    assert!(failure.offers_resend());
    assert_eq!(
        failure.message,
        "Email not verified. Please check your inbox or request a new verification email."
    );
}

#[test]
fn unverified_classification_ignores_wording() {
    let failure = AuthFailure::from_api(&status_error(403, r#"{"detail":"Confirm your address first"}"#));
    assert!(failure.offers_resend());
    assert_eq!(failure.message, "Confirm your address first");
}

#[test]
fn bad_credentials_do_not_offer_resend() {
    let failure = AuthFailure::from_api(&status_error(401, r#"{"detail":"Invalid email or password"}"#));
    assert_eq!(failure.kind, AuthFailureKind::InvalidCredentials);
    assert!(!failure.offers_resend());
    assert_eq!(failure.message, "Invalid email or password");
}

#[test]
fn status_mapping_covers_known_codes() {
    assert_eq!(AuthFailure::from_api(&status_error(404, "")).kind, AuthFailureKind::UnknownAccount);
    assert_eq!(AuthFailure::from_api(&status_error(409, "")).kind, AuthFailureKind::AlreadyRegistered);
    assert_eq!(AuthFailure::from_api(&status_error(500, "")).kind, AuthFailureKind::Rejected);
    assert_eq!(
        AuthFailure::from_api(&ApiError::Network("offline".to_owned())).kind,
        AuthFailureKind::Network
    );
}

#[test]
fn missing_detail_uses_fallback_text() {
    assert_eq!(AuthFailure::from_api(&status_error(401, "")).message, "Invalid email or password.");
    assert_eq!(
        AuthFailure::from_api(&ApiError::Network("offline".to_owned())).message,
        crate::net::http::NETWORK_FAILURE
    );
}

fn auth_response(token: &str, message: &str) -> AuthResponse {
    AuthResponse { user: Profile::default(), access_token: token.to_owned(), message: message.to_owned() }
}

#[test]
fn register_with_token_signs_in() {
    let outcome = RegisterOutcome::from_response(auth_response("abc", "Account created successfully"));
    assert!(matches!(outcome, RegisterOutcome::SignedIn(resp) if resp.access_token == "abc"));
}

#[test]
fn register_without_token_waits_for_verification() {
    let outcome = RegisterOutcome::from_response(auth_response("", "Account created successfully"));
    assert_eq!(
        outcome,
        RegisterOutcome::VerificationPending {
            message: "Account created successfully. Check your email to verify your address, then log in."
                .to_owned()
        }
    );
}

#[test]
fn recovery_token_reads_fragment_and_query() {
    assert_eq!(
        recovery_token("#access_token=tok123&expires_in=3600&type=recovery").as_deref(),
        Some("tok123")
    );
    assert_eq!(recovery_token("?type=recovery&access_token=q1").as_deref(), Some("q1"));
    assert_eq!(recovery_token("#type=recovery"), None);
    assert_eq!(recovery_token("#access_token="), None);
    assert_eq!(recovery_token(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_outside_browser_reports_network_failure() {
    let result = block_on(login("a@b.com", "pw"));
    assert_eq!(result.unwrap_err().kind, AuthFailureKind::Network);
}

/// Polls a future that completes without waking.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
