use super::*;
use crate::net::types::Role;

fn identity(role: Role) -> Identity {
    Identity { id: "1".to_owned(), name: String::new(), email: String::new(), role, contact: None }
}

// =============================================================
// AppRoute::parse
// =============================================================

#[test]
fn parse_public_routes() {
    assert_eq!(AppRoute::parse("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::parse(""), Some(AppRoute::Home));
    assert_eq!(AppRoute::parse("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::parse("/register/"), Some(AppRoute::Register));
    assert_eq!(AppRoute::parse("/forgot-password"), Some(AppRoute::ForgotPassword));
    assert_eq!(
        AppRoute::parse("/reset-password/tok123"),
        Some(AppRoute::ResetPassword { token: "tok123".to_owned() })
    );
    assert_eq!(AppRoute::parse("/property/p1"), Some(AppRoute::PropertyDetail { id: "p1".to_owned() }));
}

#[test]
fn parse_admin_routes() {
    assert_eq!(AppRoute::parse("/admin"), Some(AppRoute::AdminDashboard));
    assert_eq!(AppRoute::parse("/admin/properties"), Some(AppRoute::AdminProperties));
    assert_eq!(AppRoute::parse("/admin/properties/new"), Some(AppRoute::AdminNewProperty));
    assert_eq!(
        AppRoute::parse("/admin/properties/p1"),
        Some(AppRoute::AdminPropertyDetail { id: "p1".to_owned() })
    );
    assert_eq!(
        AppRoute::parse("/admin/properties/edit/p1"),
        Some(AppRoute::AdminEditProperty { id: "p1".to_owned() })
    );
}

#[test]
fn parse_unmatched_paths() {
    assert_eq!(AppRoute::parse("/about"), None);
    assert_eq!(AppRoute::parse("/property"), None);
    assert_eq!(AppRoute::parse("/admin/users"), None);
    assert_eq!(AppRoute::parse("/admin/properties/edit/p1/extra"), None);
}

#[test]
fn path_round_trips_through_parse() {
    let routes = [
        AppRoute::Home,
        AppRoute::ResetPassword { token: "t".to_owned() },
        AppRoute::AdminNewProperty,
        AppRoute::AdminEditProperty { id: "p9".to_owned() },
    ];
    for route in routes {
        assert_eq!(AppRoute::parse(&route.path()), Some(route.clone()));
    }
}

// =============================================================
// Zones and chrome
// =============================================================

#[test]
fn zone_follows_admin_prefix() {
    assert_eq!(zone_for_path("/admin"), Zone::Admin);
    assert_eq!(zone_for_path("/admin/properties/new"), Zone::Admin);
    assert_eq!(zone_for_path("/admin/unknown"), Zone::Admin);
    assert_eq!(zone_for_path("/administrator"), Zone::Public);
    assert_eq!(zone_for_path("/"), Zone::Public);
    assert_eq!(zone_for_path("/property/admin"), Zone::Public);
}

#[test]
fn route_zone_matches_path_zone() {
    for path in ["/", "/login", "/property/1", "/admin", "/admin/properties/edit/1"] {
        let route = AppRoute::parse(path).unwrap();
        assert_eq!(route.zone(), zone_for_path(path), "{path}");
    }
}

#[test]
fn public_chrome_shows_header_footer_and_assistant_for_signed_in() {
    assert_eq!(
        chrome_for(Zone::Public, true),
        Chrome { header: true, footer: true, assistant: true, sidebar: false }
    );
    assert_eq!(
        chrome_for(Zone::Public, false),
        Chrome { header: true, footer: true, assistant: false, sidebar: false }
    );
}

#[test]
fn admin_chrome_swaps_header_and_footer_for_sidebar() {
    for authenticated in [true, false] {
        let chrome = chrome_for(Zone::Admin, authenticated);
        assert_eq!(chrome, Chrome { header: false, footer: false, assistant: false, sidebar: true });
        assert!(!chrome.footer);
    }
}

#[test]
fn footer_follows_path_zone() {
    assert!(chrome_for(zone_for_path("/property/p1"), false).footer);
    assert!(!chrome_for(zone_for_path("/admin/properties"), true).footer);
}

// =============================================================
// Landing
// =============================================================

#[test]
fn landing_path_by_role() {
    assert_eq!(landing_path(&identity(Role::Admin)), "/admin");
    assert_eq!(landing_path(&identity(Role::User)), "/");
    assert_eq!(landing_path(&identity(Role::Unknown)), "/");
}

#[test]
fn property_paths() {
    assert_eq!(property_path("p1"), "/property/p1");
    assert_eq!(admin_property_path("p1"), "/admin/properties/p1");
    assert_eq!(admin_edit_property_path("p1"), "/admin/properties/edit/p1");
}
