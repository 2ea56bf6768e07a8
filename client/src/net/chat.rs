//! Care-assistant chat (`/api/chat`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::http::ApiError;
use super::types::ChatMessage;

pub const CHAT_PATH: &str = "/api/chat";

/// Check a transcript before sending: it must be non-empty and end with a
/// user turn, the same rules the API enforces.
///
/// # Errors
///
/// Returns the user-facing reason the transcript cannot be sent.
pub fn validate_transcript(messages: &[ChatMessage]) -> Result<(), &'static str> {
    match messages.last() {
        None => Err("No messages provided"),
        Some(last) if !last.is_user() => Err("Last message must be from user"),
        Some(last) if last.content.trim().is_empty() => Err("Type a message first."),
        Some(_) => Ok(()),
    }
}

/// `POST /api/chat`: returns the assistant's reply.
///
/// # Errors
///
/// Returns `ApiError`; 503 when the assistant is not configured.
pub async fn send_chat(messages: &[ChatMessage]) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ChatRequest { messages: messages.to_vec() };
        let request = gloo_net::http::Request::post(&crate::config::api_url(CHAT_PATH)).json(&body);
        super::http::send_json::<super::types::ChatReply>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages;
        Err(ApiError::Unavailable)
    }
}
