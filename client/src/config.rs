//! Build-time client configuration.
//!
//! The API origin is baked in at compile time from `MEDIDATA_API_URL` so the
//! same WASM bundle needs no runtime config fetch. Unset means the local
//! development API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Trim whitespace and trailing slashes; empty input falls back to the default.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

pub fn api_base_url() -> String {
    normalize_base_url(option_env!("MEDIDATA_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Absolute URL for an API path such as `/api/auth/login`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}
