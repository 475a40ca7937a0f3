//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Deserialization is deliberately lenient about shape (id aliases, numeric
//! ids, missing role) and strict about meaning: a missing or unrecognized role
//! always lands on the non-privileged [`Role::Unknown`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Authorization role carried by a server-issued identity.
///
/// Only gates UI. The server re-authorizes every privileged request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    #[default]
    Unknown,
}

impl Role {
    /// Map a wire role string. Matching is exact: `"Admin"` is not an admin.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("admin") => Self::Admin,
            Some("user") => Self::User,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(Self::from_wire(raw.as_ref().and_then(serde_json::Value::as_str)))
    }
}

/// The user record attached to a session.
///
/// Serializes with `id` (the persisted form); deserializes through
/// [`IdentityWire`] so replies carrying `id`, `_id`, or both all decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityWire")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Contact phone (WhatsApp) captured at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Identity as it arrives from the backend or from storage.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityWire {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<serde_json::Value>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    contact: Option<String>,
    #[serde(default)]
    whatsapp_contact: Option<String>,
}

impl TryFrom<IdentityWire> for Identity {
    type Error = String;

    fn try_from(wire: IdentityWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: pick_id(wire.mongo_id, wire.id)?,
            name: wire.name,
            email: wire.email,
            role: wire.role,
            contact: wire.contact.or(wire.whatsapp_contact),
        })
    }
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub contact: String,
}

/// `POST /auth/forgotpassword` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// `PUT /auth/resetpassword/:token` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Response shape shared by login, register, and password reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// A rejection carrying only an optional server message.
    pub fn rejected(message: Option<String>) -> Self {
        Self { success: false, token: None, user: None, message }
    }
}

/// `POST /auth/forgotpassword` response. `reset_token` is only echoed by
/// development servers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ForgotPasswordResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "resetToken")]
    pub reset_token: Option<String>,
}

/// `{success, data, message}` wrapper used by the property endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Whether a listing is for sale or rent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    #[default]
    Sale,
    Rent,
}

impl ListingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sale => "For Sale",
            Self::Rent => "For Rent",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub town: String,
}

/// Physical attributes of a listing. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specs {
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub is_furnished: bool,
    pub roof_type: Option<String>,
    pub floor_type: Option<String>,
    pub kitchens: Option<u32>,
    pub living_rooms: Option<u32>,
    pub doors: Option<u32>,
    pub windows: Option<u32>,
    pub parking_spaces: Option<u32>,
    pub upper_floors: Option<u32>,
}

/// A property listing as returned by `/properties`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PropertyWire")]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub property_type: ListingKind,
    pub category: String,
    pub location: Location,
    pub specs: Specs,
    pub images: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyWire {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<serde_json::Value>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    property_type: ListingKind,
    #[serde(default)]
    category: String,
    #[serde(default)]
    location: Location,
    #[serde(default)]
    specs: Specs,
    #[serde(default)]
    images: Vec<String>,
}

impl TryFrom<PropertyWire> for Property {
    type Error = String;

    fn try_from(wire: PropertyWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: pick_id(wire.mongo_id, wire.id)?,
            title: wire.title,
            description: wire.description,
            price: wire.price,
            property_type: wire.property_type,
            category: wire.category,
            location: wire.location,
            specs: wire.specs,
            images: wire.images,
        })
    }
}

impl Property {
    /// First image URL, or the placeholder used when a listing has none.
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

/// Format a price as `KES 1,250,000`. Fractions are dropped.
#[allow(clippy::cast_possible_truncation)]
pub fn format_price(price: f64) -> String {
    let whole = price.max(0.0).trunc() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("KES {grouped}")
}

/// Resolve a server id from `_id` and `id`. `_id` wins when both are sent.
fn pick_id(mongo_id: Option<serde_json::Value>, id: Option<serde_json::Value>) -> Result<String, String> {
    let value = mongo_id
        .filter(|v| !v.is_null())
        .or_else(|| id.filter(|v| !v.is_null()))
        .ok_or_else(|| "missing id".to_owned())?;
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Ok(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        serde_json::Value::String(_) => Err("empty id".to_owned()),
        _ => Err("expected string or integer id".to_owned()),
    }
}
