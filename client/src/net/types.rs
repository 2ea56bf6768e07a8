//! Wire DTOs for the MediData API.
//!
//! DESIGN
//! ======
//! Field names follow the server exactly, which mixes snake_case (auth,
//! search) and camelCase (profile, request listing) payloads. Optional
//! outbound fields are skipped when unset so partial updates stay partial.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::Profile;

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_email: Option<String>,
}

/// Successful login/registration payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: Profile,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResetPasswordRequest {
    pub access_token: String,
    pub new_password: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// =============================================================
// Requests
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One appointment request as listed by `GET /api/requests`.
///
/// `provider_name` holds the counterpart's name: the provider for patients,
/// the patient for providers.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RequestItem {
    pub id: String,
    #[serde(rename = "providerName", default)]
    pub provider_name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(rename = "requestedDate", default)]
    pub requested_date: String,
    #[serde(rename = "requestedTime", default)]
    pub requested_time: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub response: String,
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub patient_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RequestsResponse {
    #[serde(default)]
    pub requests: Vec<RequestItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateRequest {
    pub provider_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npi_num: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

// =============================================================
// Providers
// =============================================================

/// Provider card data shared by search and favorites.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProviderSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub insurance: Vec<String>,
    #[serde(default)]
    pub npi_number: String,
    #[serde(default)]
    pub enumeration_type: String,
    #[serde(default)]
    pub is_affiliated: bool,
}

impl ProviderSummary {
    /// NPI registry number, when this provider came from the registry.
    pub fn npi(&self) -> Option<u64> {
        self.npi_number.trim().parse().ok()
    }

    /// Only providers registered with MediData can receive requests.
    pub fn accepts_requests(&self) -> bool {
        self.is_affiliated
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: usize,
    #[serde(default)]
    pub results: Vec<ProviderSummary>,
}

// =============================================================
// Profile
// =============================================================

/// Account details from `GET /api/profile`; also the partial body of
/// `PUT /api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_num: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
}

// =============================================================
// Favorites
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FavoritesResponse {
    #[serde(default, deserialize_with = "ids_as_strings")]
    pub favorites: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FavoriteProvidersResponse {
    #[serde(default)]
    pub providers: Vec<ProviderSummary>,
}

// =============================================================
// Chat
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_owned(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: "assistant".to_owned(), content: content.into() }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub message: String,
}

// =============================================================
// Helpers
// =============================================================

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Favorite ids arrive as UUID strings or bare NPI integers.
fn ids_as_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}
