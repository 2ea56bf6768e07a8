//! Favorite providers (`/api/favorites`). Patients only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::collections::HashSet;

use super::http::ApiError;
use super::types::ProviderSummary;

pub const FAVORITES_PATH: &str = "/api/favorites";
pub const FAVORITE_PROVIDERS_PATH: &str = "/api/favorites/providers";

pub fn favorite_path(provider_id: &str) -> String {
    format!("{FAVORITES_PATH}/{provider_id}")
}

/// Key a provider is favorited under: the affiliated id, else the NPI number.
pub fn favorite_key(provider: &ProviderSummary) -> &str {
    if provider.is_affiliated || provider.npi_number.trim().is_empty() {
        &provider.id
    } else {
        provider.npi_number.trim()
    }
}

pub fn is_favorite(favorites: &HashSet<String>, provider: &ProviderSummary) -> bool {
    favorites.contains(favorite_key(provider))
}

/// `GET /api/favorites`: ids of favorited providers.
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn list_favorite_ids(token: &str) -> Result<HashSet<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::get(&crate::config::api_url(FAVORITES_PATH)),
            token,
        )
        .build();
        super::http::send_json::<super::types::FavoritesResponse>(request)
            .await
            .map(|r| r.favorites.into_iter().collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/favorites/providers`: favorited providers with display data.
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn list_favorite_providers(token: &str) -> Result<Vec<ProviderSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::get(&crate::config::api_url(FAVORITE_PROVIDERS_PATH)),
            token,
        )
        .build();
        super::http::send_json::<super::types::FavoriteProvidersResponse>(request)
            .await
            .map(|r| r.providers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/favorites/{id}`.
///
/// # Errors
///
/// Returns `ApiError`; 409 when already a favorite.
pub async fn add_favorite(token: &str, key: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::post(&crate::config::api_url(&favorite_path(key))),
            token,
        )
        .build();
        super::http::send_json::<super::types::MessageResponse>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, key);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/favorites/{id}`.
///
/// # Errors
///
/// Returns `ApiError` on transport or server failure.
pub async fn remove_favorite(token: &str, key: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = super::http::with_bearer(
            gloo_net::http::Request::delete(&crate::config::api_url(&favorite_path(key))),
            token,
        )
        .build();
        super::http::send_json::<super::types::MessageResponse>(request).await.map(|r| r.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, key);
        Err(ApiError::Unavailable)
    }
}
