use super::*;
use crate::net::types::{Location, Specs};

fn property() -> Property {
    Property {
        id: "p1".to_owned(),
        title: "Garden bungalow".to_owned(),
        description: "Quiet street".to_owned(),
        price: 8_500_000.0,
        property_type: ListingKind::Rent,
        category: "bungalow".to_owned(),
        location: Location { county: "Kiambu".to_owned(), town: "Ruiru".to_owned() },
        specs: Specs { bedrooms: Some(3), is_furnished: true, roof_type: Some("tile".to_owned()), ..Specs::default() },
        images: Vec::new(),
    }
}

fn field<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
    fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

// =============================================================
// PropertyFilters
// =============================================================

#[test]
fn empty_filters_build_empty_query() {
    let filters = PropertyFilters::default();
    assert!(filters.is_empty());
    assert_eq!(filters.to_query(), "");
}

#[test]
fn filters_skip_blank_values_and_encode() {
    let filters = PropertyFilters {
        county: "Nairobi".to_owned(),
        town: "   ".to_owned(),
        category: "apartment".to_owned(),
        max_price: "50000".to_owned(),
        property_type: "rent".to_owned(),
        ..PropertyFilters::default()
    };
    assert_eq!(filters.to_query(), "county=Nairobi&propertyType=rent&category=apartment&maxPrice=50000");
}

#[test]
fn filters_encode_spaces_and_ampersands() {
    let filters = PropertyFilters { town: "Kilimani & Co".to_owned(), ..PropertyFilters::default() };
    assert_eq!(filters.to_query(), "town=Kilimani%20%26%20Co");
}

// =============================================================
// PropertyDraft
// =============================================================

#[test]
fn default_draft_only_sends_kind_category_and_furnished_flag() {
    let fields = PropertyDraft::default().to_fields();
    assert_eq!(
        fields,
        vec![
            ("propertyType".to_owned(), "sale".to_owned()),
            ("category".to_owned(), "apartment".to_owned()),
            ("specs.isFurnished".to_owned(), "false".to_owned()),
        ]
    );
}

#[test]
fn draft_flattens_nested_keys() {
    let fields = PropertyDraft::from_property(&property()).to_fields();
    assert_eq!(field(&fields, "price"), Some("8500000"));
    assert_eq!(field(&fields, "propertyType"), Some("rent"));
    assert_eq!(field(&fields, "location.county"), Some("Kiambu"));
    assert_eq!(field(&fields, "location.town"), Some("Ruiru"));
    assert_eq!(field(&fields, "specs.bedrooms"), Some("3"));
    assert_eq!(field(&fields, "specs.isFurnished"), Some("true"));
    assert_eq!(field(&fields, "specs.roofType"), Some("tile"));
    assert_eq!(field(&fields, "specs.bathrooms"), None);
}

#[test]
fn draft_text_fields_read_back_what_was_set() {
    let mut draft = PropertyDraft::default();
    draft.set_text(DraftField::LivingRooms, "2".to_owned());
    draft.set_text(DraftField::County, "Mombasa".to_owned());
    assert_eq!(draft.text(DraftField::LivingRooms), "2");
    assert_eq!(draft.living_rooms, "2");
    assert_eq!(draft.text(DraftField::County), "Mombasa");
    assert_eq!(draft.text(DraftField::Title), "");
}

#[test]
fn draft_reports_missing_required_fields() {
    let mut draft = PropertyDraft { title: "Flat".to_owned(), ..PropertyDraft::default() };
    assert_eq!(draft.missing_required(), vec!["description", "price"]);
    draft.description = "Nice".to_owned();
    draft.price = "100".to_owned();
    assert!(draft.missing_required().is_empty());
}

#[test]
fn draft_from_property_without_category_uses_default() {
    let mut p = property();
    p.category.clear();
    assert_eq!(PropertyDraft::from_property(&p).category, "apartment");
}

// =============================================================
// ListingsState
// =============================================================

#[test]
fn listings_remove_drops_only_matching_id() {
    let mut other = property();
    other.id = "p2".to_owned();
    let mut state = ListingsState::loaded(vec![property(), other]);
    state.remove("p1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "p2");
}

#[test]
fn failed_listing_keeps_message() {
    let state = ListingsState::failed("Failed to load properties");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to load properties"));
}
