//! Provider search (`/api/providers/search`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

use super::http::ApiError;
use super::types::SearchResponse;

pub const SEARCH_PATH: &str = "/api/providers/search";
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 200;

/// Search form criteria. Blank fields are not sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderQuery {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub organization_name: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub limit: u32,
}

impl Default for ProviderQuery {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            specialty: String::new(),
            organization_name: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ProviderQuery {
    fn criteria(&self) -> [(&'static str, &str); 7] {
        [
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("taxonomy_description", self.specialty.as_str()),
            ("organization_name", self.organization_name.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("postal_code", self.postal_code.as_str()),
        ]
    }

    /// No search criteria at all.
    pub fn is_empty(&self) -> bool {
        self.criteria().iter().all(|(_, v)| v.trim().is_empty())
    }

    /// Query-string pairs: trimmed non-blank criteria, upper-cased state,
    /// and a limit clamped to the API's accepted range.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .criteria()
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                let value = if key == "state" { value.to_ascii_uppercase() } else { value.to_owned() };
                Some((key, value))
            })
            .collect();
        pairs.push(("limit", self.limit.clamp(1, MAX_LIMIT).to_string()));
        pairs
    }
}

/// `GET /api/providers/search`. An empty query resolves locally to no
/// results, matching the server's own short-circuit.
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn search_providers(query: &ProviderQuery) -> Result<SearchResponse, ApiError> {
    if query.is_empty() {
        return Ok(SearchResponse::default());
    }
    #[cfg(feature = "hydrate")]
    {
        let pairs = query.query_pairs();
        let request = gloo_net::http::Request::get(&crate::config::api_url(SEARCH_PATH))
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .build();
        super::http::send_json::<SearchResponse>(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
