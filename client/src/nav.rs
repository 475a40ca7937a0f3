//! Static route table and zone/chrome derivation for the navigation shell.
//!
//! ARCHITECTURE
//! ============
//! The Leptos `<Routes>` in `app.rs` mirrors [`AppRoute`] one-to-one. Chrome
//! decisions (public header, assistant launcher, admin sidebar) are derived
//! from the current path's [`Zone`] here so they can be tested without a DOM.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Identity;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_PROPERTIES_PATH: &str = "/admin/properties";
pub const ADMIN_NEW_PROPERTY_PATH: &str = "/admin/properties/new";

/// Which part of the app a path belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Public,
    /// `/admin` and everything beneath it.
    Admin,
}

/// Every view the app can render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: String },
    PropertyDetail { id: String },
    AdminDashboard,
    AdminProperties,
    AdminNewProperty,
    AdminPropertyDetail { id: String },
    AdminEditProperty { id: String },
}

impl AppRoute {
    /// Match a path against the route table. Unmatched paths return `None`
    /// and fall through to the router's not-found view.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["forgot-password"] => Self::ForgotPassword,
            ["reset-password", token] => Self::ResetPassword { token: (*token).to_owned() },
            ["property", id] => Self::PropertyDetail { id: (*id).to_owned() },
            ["admin"] => Self::AdminDashboard,
            ["admin", "properties"] => Self::AdminProperties,
            ["admin", "properties", "new"] => Self::AdminNewProperty,
            ["admin", "properties", "edit", id] => Self::AdminEditProperty { id: (*id).to_owned() },
            ["admin", "properties", id] => Self::AdminPropertyDetail { id: (*id).to_owned() },
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => REGISTER_PATH.to_owned(),
            Self::ForgotPassword => FORGOT_PASSWORD_PATH.to_owned(),
            Self::ResetPassword { token } => format!("/reset-password/{token}"),
            Self::PropertyDetail { id } => format!("/property/{id}"),
            Self::AdminDashboard => ADMIN_PATH.to_owned(),
            Self::AdminProperties => ADMIN_PROPERTIES_PATH.to_owned(),
            Self::AdminNewProperty => ADMIN_NEW_PROPERTY_PATH.to_owned(),
            Self::AdminPropertyDetail { id } => format!("{ADMIN_PROPERTIES_PATH}/{id}"),
            Self::AdminEditProperty { id } => format!("{ADMIN_PROPERTIES_PATH}/edit/{id}"),
        }
    }

    pub fn zone(&self) -> Zone {
        match self {
            Self::AdminDashboard
            | Self::AdminProperties
            | Self::AdminNewProperty
            | Self::AdminPropertyDetail { .. }
            | Self::AdminEditProperty { .. } => Zone::Admin,
            _ => Zone::Public,
        }
    }
}

/// Zone of an arbitrary path, matched or not. `/administrator` is public.
pub fn zone_for_path(path: &str) -> Zone {
    let first = path.split('/').find(|s| !s.is_empty());
    if first == Some("admin") { Zone::Admin } else { Zone::Public }
}

/// Shared chrome visible around the routed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chrome {
    pub header: bool,
    pub footer: bool,
    pub assistant: bool,
    pub sidebar: bool,
}

/// Chrome for `zone`. Header and footer belong to the public zone; the
/// assistant launcher is only offered to signed-in visitors there.
pub fn chrome_for(zone: Zone, authenticated: bool) -> Chrome {
    match zone {
        Zone::Public => Chrome { header: true, footer: true, assistant: authenticated, sidebar: false },
        Zone::Admin => Chrome { header: false, footer: false, assistant: false, sidebar: true },
    }
}

/// Where to send a user right after signing in.
pub fn landing_path(identity: &Identity) -> &'static str {
    if identity.is_admin() { ADMIN_PATH } else { HOME_PATH }
}

pub fn property_path(id: &str) -> String {
    AppRoute::PropertyDetail { id: id.to_owned() }.path()
}

pub fn admin_property_path(id: &str) -> String {
    AppRoute::AdminPropertyDetail { id: id.to_owned() }.path()
}

pub fn admin_edit_property_path(id: &str) -> String {
    AppRoute::AdminEditProperty { id: id.to_owned() }.path()
}
