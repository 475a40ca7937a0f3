use super::*;

#[test]
fn normalize_base_url_defaults_when_unset_or_blank() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://api.home254.co.ke/api/")), "https://api.home254.co.ke/api");
    assert_eq!(normalize_base_url(Some(" /api// ")), "/api");
}

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("/api", "/auth/login"), "/api/auth/login");
    assert_eq!(endpoint("/api/", "properties"), "/api/properties");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
