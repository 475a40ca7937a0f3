use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_wire_is_exact() {
    assert_eq!(Role::from_wire(Some("admin")), Role::Admin);
    assert_eq!(Role::from_wire(Some("user")), Role::User);
    assert_eq!(Role::from_wire(Some("Admin")), Role::Unknown);
    assert_eq!(Role::from_wire(Some("superuser")), Role::Unknown);
    assert_eq!(Role::from_wire(None), Role::Unknown);
}

#[test]
fn role_serializes_to_lowercase_string() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Unknown).unwrap(), "\"unknown\"");
}

#[test]
fn role_deserializes_non_string_as_unknown() {
    let role: Role = serde_json::from_str("42").unwrap();
    assert_eq!(role, Role::Unknown);
    let role: Role = serde_json::from_str("null").unwrap();
    assert_eq!(role, Role::Unknown);
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_accepts_numeric_id_and_missing_fields() {
    let identity: Identity = serde_json::from_str(r#"{"id": 1, "role": "admin"}"#).unwrap();
    assert_eq!(identity.id, "1");
    assert_eq!(identity.name, "");
    assert!(identity.is_admin());
}

#[test]
fn identity_accepts_mongo_style_id_and_whatsapp_contact() {
    let identity: Identity = serde_json::from_str(
        r#"{"_id": "64f0c1", "name": "Wanjiru", "email": "w@x.com", "whatsappContact": "+254700000000"}"#,
    )
    .unwrap();
    assert_eq!(identity.id, "64f0c1");
    assert_eq!(identity.contact.as_deref(), Some("+254700000000"));
}

#[test]
fn identity_accepts_both_id_keys() {
    let identity: Identity = serde_json::from_str(
        r#"{"_id": "64f0", "id": "64f0", "name": "A", "email": "a@x.com", "role": "admin"}"#,
    )
    .unwrap();
    assert_eq!(identity.id, "64f0");
    assert!(identity.is_admin());
}

#[test]
fn identity_prefers_mongo_id_when_keys_differ() {
    let identity: Identity = serde_json::from_str(r#"{"id": 7, "_id": "64f0"}"#).unwrap();
    assert_eq!(identity.id, "64f0");
    let identity: Identity = serde_json::from_str(r#"{"id": 7, "_id": null}"#).unwrap();
    assert_eq!(identity.id, "7");
}

#[test]
fn identity_accepts_both_contact_keys() {
    let identity: Identity =
        serde_json::from_str(r#"{"id": "u1", "contact": "0700", "whatsappContact": "0711"}"#).unwrap();
    assert_eq!(identity.contact.as_deref(), Some("0700"));
}

#[test]
fn identity_missing_role_is_unknown() {
    let identity: Identity = serde_json::from_str(r#"{"id": "u1"}"#).unwrap();
    assert_eq!(identity.role, Role::Unknown);
    assert!(!identity.is_admin());
}

#[test]
fn identity_without_id_is_rejected() {
    assert!(serde_json::from_str::<Identity>(r#"{"name": "nobody"}"#).is_err());
    assert!(serde_json::from_str::<Identity>(r#"{"id": ""}"#).is_err());
    assert!(serde_json::from_str::<Identity>(r#"{"id": 1.5}"#).is_err());
}

#[test]
fn identity_persisted_form_reads_back() {
    let identity = Identity {
        id: "u1".to_owned(),
        name: "Achieng".to_owned(),
        email: "a@x.com".to_owned(),
        role: Role::User,
        contact: None,
    };
    let raw = serde_json::to_string(&identity).unwrap();
    assert!(!raw.contains("contact"));
    let back: Identity = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, identity);
}

// =============================================================
// Requests and responses
// =============================================================

#[test]
fn register_request_serializes_contact_field() {
    let req = RegisterRequest {
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        password: "secret".to_owned(),
        contact: "0700".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"name": "A", "email": "a@x.com", "password": "secret", "contact": "0700"})
    );
}

#[test]
fn auth_response_defaults_to_failure() {
    let resp: AuthResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, AuthResponse::rejected(None));
}

#[test]
fn auth_response_parses_full_success() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"success": true, "token": "abc", "user": {"id": 1, "role": "admin"}}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("abc"));
    assert_eq!(resp.user.map(|u| u.role), Some(Role::Admin));
}

#[test]
fn auth_response_accepts_user_with_both_id_keys() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"success":true,"token":"abc","user":{"_id":"64f0","id":"64f0","name":"A","email":"a@x.com","role":"admin"}}"#,
    )
    .unwrap();
    let user = resp.user.unwrap();
    assert_eq!(user.id, "64f0");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn forgot_password_response_reads_reset_token() {
    let resp: ForgotPasswordResponse =
        serde_json::from_str(r#"{"success": true, "resetToken": "r-1"}"#).unwrap();
    assert_eq!(resp.reset_token.as_deref(), Some("r-1"));
}

// =============================================================
// Property
// =============================================================

fn sample_property_json() -> &'static str {
    r#"{
        "_id": "p1",
        "title": "Two bed in Kilimani",
        "price": 8500000,
        "propertyType": "rent",
        "category": "apartment",
        "location": {"county": "Nairobi", "town": "Kilimani"},
        "specs": {"bedrooms": 2, "isFurnished": true, "parkingSpaces": 1},
        "images": []
    }"#
}

#[test]
fn property_parses_nested_fields() {
    let property: Property = serde_json::from_str(sample_property_json()).unwrap();
    assert_eq!(property.id, "p1");
    assert_eq!(property.property_type, ListingKind::Rent);
    assert_eq!(property.location.town, "Kilimani");
    assert_eq!(property.specs.bedrooms, Some(2));
    assert_eq!(property.specs.parking_spaces, Some(1));
    assert!(property.specs.is_furnished);
    assert_eq!(property.specs.bathrooms, None);
}

#[test]
fn property_accepts_both_id_keys() {
    let raw = r#"{"_id": "p1", "id": "p1", "title": "Plot in Ruiru"}"#;
    let property: Property = serde_json::from_str(raw).unwrap();
    assert_eq!(property.id, "p1");
    assert_eq!(property.property_type, ListingKind::Sale);

    let property: Property = serde_json::from_str(r#"{"id": 12, "title": "Shop"}"#).unwrap();
    assert_eq!(property.id, "12");
    assert!(serde_json::from_str::<Property>(r#"{"title": "No id"}"#).is_err());
}

#[test]
fn property_without_images_uses_placeholder() {
    let property: Property = serde_json::from_str(sample_property_json()).unwrap();
    assert_eq!(property.cover_image(), PLACEHOLDER_IMAGE);
}

#[test]
fn envelope_wraps_property_list() {
    let raw = format!(r#"{{"success": true, "data": [{}]}}"#, sample_property_json());
    let envelope: Envelope<Vec<Property>> = serde_json::from_str(&raw).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.map(|d| d.len()), Some(1));
}

#[test]
fn listing_kind_labels() {
    assert_eq!(ListingKind::Sale.label(), "For Sale");
    assert_eq!(ListingKind::Rent.label(), "For Rent");
}

#[test]
fn format_price_groups_thousands() {
    assert_eq!(format_price(0.0), "KES 0");
    assert_eq!(format_price(999.0), "KES 999");
    assert_eq!(format_price(1000.0), "KES 1,000");
    assert_eq!(format_price(8_500_000.75), "KES 8,500,000");
    assert_eq!(format_price(-5.0), "KES 0");
}
