//! Build-time client configuration.
//!
//! The REST backend base URL is baked in at compile time from the
//! `API_BASE_URL` environment variable; there is no runtime override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Base URL of the REST backend, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// Join the base URL with an endpoint path such as `/auth/login`.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
