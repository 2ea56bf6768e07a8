use super::*;

#[test]
fn normalize_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.test//"), "https://api.example.test");
}

#[test]
fn normalize_empty_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
}

#[test]
fn join_url_handles_leading_slash() {
    assert_eq!(join_url("http://h:8000", "/api/health"), "http://h:8000/api/health");
    assert_eq!(join_url("http://h:8000", "api/health"), "http://h:8000/api/health");
}

#[test]
fn api_url_uses_api_prefix() {
    assert!(api_url("/api/auth/login").ends_with("/api/auth/login"));
}
