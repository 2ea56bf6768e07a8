//! Appointment request endpoints (`/api/requests`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use super::http::ApiError;
use super::types::{CreateRequest, RequestItem, UpdateRequest};

pub const REQUESTS_PATH: &str = "/api/requests";

pub fn request_path(request_id: &str) -> String {
    format!("{REQUESTS_PATH}/{request_id}")
}

/// Normalize a time input to `HH:MM:SS`. `HH:MM` gains `:00`; anything else
/// is passed through trimmed.
pub fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() == 2 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) {
        format!("{trimmed}:00")
    } else {
        trimmed.to_owned()
    }
}

/// Build a create body from form input; blank optional fields are omitted.
///
/// # Errors
///
/// Returns a user-facing message when the provider or message is missing.
pub fn build_create_request(
    provider_id: &str,
    message: &str,
    date: &str,
    time: &str,
    npi_num: Option<u64>,
) -> Result<CreateRequest, &'static str> {
    let provider_id = provider_id.trim();
    if provider_id.is_empty() {
        return Err("Choose a provider first.");
    }
    let message = message.trim();
    if message.is_empty() {
        return Err("Add a short message for the provider.");
    }
    let date = date.trim();
    let time = time.trim();
    Ok(CreateRequest {
        provider_id: provider_id.to_owned(),
        message: message.to_owned(),
        date: (!date.is_empty()).then(|| date.to_owned()),
        time: (!time.is_empty()).then(|| normalize_time(time)),
        npi_num,
    })
}

/// `GET /api/requests`: the caller's requests (as patient or provider).
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn list_requests(token: &str) -> Result<Vec<RequestItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::get(&crate::config::api_url(REQUESTS_PATH)),
            token,
        )
        .build();
        super::http::send_json::<super::types::RequestsResponse>(request).await.map(|r| r.requests)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/requests` (patients only).
///
/// # Errors
///
/// Returns `ApiError`; 403 for providers, 404 for an unknown provider.
pub async fn create_request(token: &str, body: &CreateRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::post(&crate::config::api_url(REQUESTS_PATH)),
            token,
        )
        .json(body);
        super::http::send_json::<super::types::MessageResponse>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, body);
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/requests/{id}`. Patients edit date/time/message; providers set
/// status and response.
///
/// # Errors
///
/// Returns `ApiError`; 403 when the caller may not change these fields.
pub async fn update_request(token: &str, request_id: &str, body: &UpdateRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::put(&crate::config::api_url(&request_path(request_id))),
            token,
        )
        .json(body);
        super::http::send_json::<super::types::MessageResponse>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request_id, body);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/requests/{id}` (patients only).
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn cancel_request(token: &str, request_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::delete(&crate::config::api_url(&request_path(request_id))),
            token,
        )
        .build();
        super::http::send_json::<super::types::MessageResponse>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request_id);
        Err(ApiError::Unavailable)
    }
}
