//! Shared request plumbing.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! `ApiError::Unavailable`, since the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! FastAPI rejects with `{"detail": "..."}` (or a list of validation items).
//! The detail text is kept verbatim for display; callers never see panics.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

/// Shown when a failure carries no server-provided reason.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
/// Shown for transport-level failures.
pub const NETWORK_FAILURE: &str = "Could not reach the server. Check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Not running in a browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The bearer token was rejected; the local session is stale.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// User-facing text: server detail verbatim, else a generic message.
    pub fn message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Network(_) | Self::Unavailable => NETWORK_FAILURE.to_owned(),
            Self::Status { detail: None, .. } | Self::Decode(_) => GENERIC_FAILURE.to_owned(),
        }
    }
}

/// Extract the `detail` reason from an error body.
pub fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

pub fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, detail: detail_from_body(body) }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
pub(crate) fn with_bearer(
    builder: gloo_net::http::RequestBuilder,
    token: &str,
) -> gloo_net::http::RequestBuilder {
    builder.header("Authorization", &bearer_header(token))
}

/// Send `request` and decode a JSON body on success.
#[cfg(feature = "hydrate")]
pub(crate) async fn send_json<T: serde::de::DeserializeOwned>(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = status_error(status, &body);
        leptos::logging::warn!("{} -> {status}: {}", resp.url(), err.message());
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
