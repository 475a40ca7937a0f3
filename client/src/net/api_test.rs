use super::*;
use crate::net::types::Role;

// =============================================================
// URLs and headers
// =============================================================

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn property_url_encodes_id() {
    assert_eq!(property_url("/api", "p1"), "/api/properties/p1");
    assert_eq!(property_url("/api", "a b/c"), "/api/properties/a%20b%2Fc");
}

#[test]
fn search_url_omits_empty_query() {
    assert_eq!(search_url("/api", ""), "/api/properties/search");
    assert_eq!(search_url("/api", "county=Nairobi"), "/api/properties/search?county=Nairobi");
}

#[test]
fn reset_password_url_embeds_token() {
    assert_eq!(reset_password_url("https://x.test/api", "t0k"), "https://x.test/api/auth/resetpassword/t0k");
}

#[test]
fn http_api_joins_configured_base() {
    let api = HttpApi::new("https://x.test/api/");
    assert_eq!(api.url("/auth/login"), "https://x.test/api/auth/login");
}

// =============================================================
// classify_reply
// =============================================================

#[test]
fn classify_reply_decodes_success_body() {
    let body = r#"{"success": true, "token": "abc", "user": {"id": 1, "role": "admin"}}"#;
    let resp = classify_reply(200, body, AuthResponse::rejected).unwrap();
    assert!(resp.success);
    assert_eq!(resp.user.map(|u| u.role), Some(Role::Admin));
}

#[test]
fn classify_reply_success_status_with_garbage_is_decode_error() {
    let err = classify_reply(200, "<html>", AuthResponse::rejected).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn classify_reply_client_error_becomes_rejection_with_message() {
    let body = r#"{"success": false, "message": "User already exists"}"#;
    let resp = classify_reply(400, body, AuthResponse::rejected).unwrap();
    assert_eq!(resp, AuthResponse::rejected(Some("User already exists".to_owned())));
}

#[test]
fn classify_reply_client_error_without_body_has_no_message() {
    let resp = classify_reply(401, "", AuthResponse::rejected).unwrap();
    assert_eq!(resp, AuthResponse::rejected(None));
    let resp = classify_reply(401, r#"{"message": "  "}"#, AuthResponse::rejected).unwrap();
    assert_eq!(resp.message, None);
}

#[test]
fn classify_reply_client_error_never_reports_success() {
    let body = r#"{"success": true, "token": "abc", "user": {"id": 1}}"#;
    let resp = classify_reply(403, body, AuthResponse::rejected).unwrap();
    assert!(!resp.success);
    assert!(resp.token.is_none());
}

#[test]
fn classify_reply_server_error_is_status_error() {
    let err = classify_reply(503, r#"{"message": "down"}"#, AuthResponse::rejected).unwrap_err();
    assert_eq!(err, ApiError::Status(503));
}

#[test]
fn classify_reply_redirect_is_status_error() {
    let err = classify_reply(302, "", AuthResponse::rejected).unwrap_err();
    assert_eq!(err, ApiError::Status(302));
}

// =============================================================
// classify_envelope / classify_ack
// =============================================================

#[test]
fn classify_envelope_returns_data() {
    let body = r#"{"success": true, "data": [1, 2, 3]}"#;
    let data: Vec<u32> = classify_envelope(200, body).unwrap();
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn classify_envelope_unsuccessful_is_rejected() {
    let body = r#"{"success": false, "message": "Property not found"}"#;
    let err = classify_envelope::<Vec<u32>>(200, body).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Property not found".to_owned()));
}

#[test]
fn classify_envelope_not_found_status() {
    let err = classify_envelope::<Vec<u32>>(404, "").unwrap_err();
    assert_eq!(err, ApiError::Rejected("request failed: 404".to_owned()));
}

#[test]
fn classify_ack_accepts_empty_success_body() {
    assert_eq!(classify_ack(204, "", "fallback"), Ok(()));
    assert_eq!(classify_ack(200, r#"{"success": true}"#, "fallback"), Ok(()));
}

#[test]
fn classify_ack_explicit_failure_uses_message_or_fallback() {
    assert_eq!(
        classify_ack(200, r#"{"success": false}"#, "fallback"),
        Err(ApiError::Rejected("fallback".to_owned()))
    );
    assert_eq!(
        classify_ack(403, r#"{"message": "Not your listing"}"#, "fallback"),
        Err(ApiError::Rejected("Not your listing".to_owned()))
    );
}

#[test]
fn classify_ack_server_error() {
    assert_eq!(classify_ack(500, "", "fallback"), Err(ApiError::Status(500)));
}

// =============================================================
// Server-side builds
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_the_browser() {
    let api = HttpApi::new("/api");
    let request = LoginRequest { email: "a@x.com".to_owned(), password: "secret".to_owned() };
    let result = futures::executor::block_on(api.login(&request));
    assert_eq!(result, Err(ApiError::Unavailable));
}
