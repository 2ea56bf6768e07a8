//! Authentication endpoints and failure classification.
//!
//! Login failures are classified by HTTP status rather than by the wording
//! of the server's reason: the API answers an unverified account with 403
//! and nothing else on this route does. The reason text is still shown to
//! the user as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::http::ApiError;
use super::types::{AuthResponse, RegisterRequest};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const RESEND_VERIFICATION_PATH: &str = "/api/auth/resend-verification";
pub const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";

/// Why an auth call did not produce a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFailureKind {
    /// Correct credentials, but the email address is not confirmed yet.
    EmailUnverified,
    InvalidCredentials,
    UnknownAccount,
    AlreadyRegistered,
    /// Any other rejection; the message carries the server reason.
    Rejected,
    Network,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFailure {
    pub kind: AuthFailureKind,
    pub message: String,
}

impl AuthFailure {
    pub fn from_api(err: &ApiError) -> Self {
        let kind = match err {
            ApiError::Status { status: 403, .. } => AuthFailureKind::EmailUnverified,
            ApiError::Status { status: 401, .. } => AuthFailureKind::InvalidCredentials,
            ApiError::Status { status: 404, .. } => AuthFailureKind::UnknownAccount,
            ApiError::Status { status: 409, .. } => AuthFailureKind::AlreadyRegistered,
            ApiError::Status { .. } | ApiError::Decode(_) => AuthFailureKind::Rejected,
            ApiError::Network(_) | ApiError::Unavailable => AuthFailureKind::Network,
        };
        let message = match (kind, err) {
            (AuthFailureKind::EmailUnverified, ApiError::Status { detail: None, .. }) => {
                "Email not verified. Please check your inbox or request a new verification email.".to_owned()
            }
            (AuthFailureKind::InvalidCredentials, ApiError::Status { detail: None, .. }) => {
                "Invalid email or password.".to_owned()
            }
            _ => err.message(),
        };
        Self { kind, message }
    }

    /// Whether the UI should offer "resend verification email".
    pub fn offers_resend(&self) -> bool {
        self.kind == AuthFailureKind::EmailUnverified
    }
}

/// What a successful registration call means for the session.
#[derive(Clone, Debug, PartialEq)]
pub enum RegisterOutcome {
    /// The API issued a token; sign in immediately.
    SignedIn(AuthResponse),
    /// Email confirmation is required before the first login.
    VerificationPending { message: String },
}

impl RegisterOutcome {
    pub fn from_response(resp: AuthResponse) -> Self {
        if resp.access_token.trim().is_empty() {
            let message = if resp.message.trim().is_empty() {
                "Account created. Check your email to verify your address, then log in.".to_owned()
            } else {
                format!("{}. Check your email to verify your address, then log in.", resp.message.trim_end_matches('.'))
            };
            Self::VerificationPending { message }
        } else {
            Self::SignedIn(resp)
        }
    }
}

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a classified `AuthFailure`; see `AuthFailureKind`.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, AuthFailure> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let request = gloo_net::http::Request::post(&crate::config::api_url(LOGIN_PATH)).json(&body);
        super::http::send_json::<AuthResponse>(request)
            .await
            .map_err(|e| AuthFailure::from_api(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthFailure::from_api(&ApiError::Unavailable))
    }
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns a classified `AuthFailure` (409 means the email is taken).
pub async fn register(request: &RegisterRequest) -> Result<RegisterOutcome, AuthFailure> {
    #[cfg(feature = "hydrate")]
    {
        let built = gloo_net::http::Request::post(&crate::config::api_url(REGISTER_PATH)).json(request);
        super::http::send_json::<AuthResponse>(built)
            .await
            .map(RegisterOutcome::from_response)
            .map_err(|e| AuthFailure::from_api(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(AuthFailure::from_api(&ApiError::Unavailable))
    }
}

async fn post_email(path: &str, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::EmailRequest { email: email.to_owned() };
        let request = gloo_net::http::Request::post(&crate::config::api_url(path)).json(&body);
        super::http::send_json::<super::types::MessageResponse>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, email);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/resend-verification`. Returns the server acknowledgement.
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn resend_verification(email: &str) -> Result<String, ApiError> {
    post_email(RESEND_VERIFICATION_PATH, email).await
}

/// `POST /api/auth/forgot-password`. Returns the server acknowledgement.
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn forgot_password(email: &str) -> Result<String, ApiError> {
    post_email(FORGOT_PASSWORD_PATH, email).await
}

/// `POST /api/auth/reset-password` with the recovery token from the emailed
/// link.
///
/// # Errors
///
/// Returns `ApiError`; a 400 means the link is invalid or expired.
pub async fn reset_password(access_token: &str, new_password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ResetPasswordRequest {
            access_token: access_token.to_owned(),
            new_password: new_password.to_owned(),
        };
        let request = gloo_net::http::Request::post(&crate::config::api_url(RESET_PASSWORD_PATH)).json(&body);
        super::http::send_json::<super::types::MessageResponse>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, new_password);
        Err(ApiError::Unavailable)
    }
}

/// Pull the recovery `access_token` out of a reset link's URL fragment
/// (`#access_token=...&type=recovery`) or query string.
pub fn recovery_token(fragment_or_query: &str) -> Option<String> {
    fragment_or_query
        .trim_start_matches(['#', '?'])
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "access_token")
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}
