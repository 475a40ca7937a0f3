//! Property listing state: search filters and the admin property draft.
//!
//! DESIGN
//! ======
//! Both types are plain data so query building and form flattening stay
//! testable without a browser. Pages own them inside `RwSignal`s.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::types::{ListingKind, Property};

pub const CATEGORIES: [&str; 4] = ["apartment", "bungalow", "land", "office"];

/// Loaded listings for a page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingsState {
    pub items: Vec<Property>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ListingsState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn loaded(items: Vec<Property>) -> Self {
        Self { items, loading: false, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { items: Vec::new(), loading: false, error: Some(message.into()) }
    }

    /// Drop a deleted listing without refetching.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }
}

/// Search form values. Empty fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyFilters {
    pub county: String,
    pub town: String,
    pub property_type: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
}

impl PropertyFilters {
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// URL query for `GET /properties/search`, without the leading `?`.
    pub fn to_query(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("county", &self.county),
            ("town", &self.town),
            ("propertyType", &self.property_type),
            ("category", &self.category),
            ("minPrice", &self.min_price),
            ("maxPrice", &self.max_price),
            ("bedrooms", &self.bedrooms),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.trim()))
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

/// Editable form state for creating or updating a listing.
///
/// Numeric inputs stay as text until submission; the backend validates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub property_type: ListingKind,
    pub category: String,
    pub county: String,
    pub town: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub is_furnished: bool,
    pub roof_type: String,
    pub floor_type: String,
    pub kitchens: String,
    pub living_rooms: String,
    pub doors: String,
    pub windows: String,
    pub parking_spaces: String,
    pub upper_floors: String,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            property_type: ListingKind::Sale,
            category: CATEGORIES[0].to_owned(),
            county: String::new(),
            town: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            is_furnished: false,
            roof_type: String::new(),
            floor_type: String::new(),
            kitchens: String::new(),
            living_rooms: String::new(),
            doors: String::new(),
            windows: String::new(),
            parking_spaces: String::new(),
            upper_floors: String::new(),
        }
    }
}

/// Free-text inputs of the property form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Price,
    County,
    Town,
    Bedrooms,
    Bathrooms,
    RoofType,
    FloorType,
    Kitchens,
    LivingRooms,
    Doors,
    Windows,
    ParkingSpaces,
    UpperFloors,
}

fn count(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

impl PropertyDraft {
    /// Prefill from an existing listing for editing.
    pub fn from_property(property: &Property) -> Self {
        let specs = &property.specs;
        let price = if property.price.fract() == 0.0 {
            format!("{:.0}", property.price)
        } else {
            property.price.to_string()
        };
        Self {
            title: property.title.clone(),
            description: property.description.clone(),
            price,
            property_type: property.property_type,
            category: if property.category.is_empty() { CATEGORIES[0].to_owned() } else { property.category.clone() },
            county: property.location.county.clone(),
            town: property.location.town.clone(),
            bedrooms: count(specs.bedrooms),
            bathrooms: count(specs.bathrooms),
            is_furnished: specs.is_furnished,
            roof_type: specs.roof_type.clone().unwrap_or_default(),
            floor_type: specs.floor_type.clone().unwrap_or_default(),
            kitchens: count(specs.kitchens),
            living_rooms: count(specs.living_rooms),
            doors: count(specs.doors),
            windows: count(specs.windows),
            parking_spaces: count(specs.parking_spaces),
            upper_floors: count(specs.upper_floors),
        }
    }

    fn slot(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
            DraftField::County => &mut self.county,
            DraftField::Town => &mut self.town,
            DraftField::Bedrooms => &mut self.bedrooms,
            DraftField::Bathrooms => &mut self.bathrooms,
            DraftField::RoofType => &mut self.roof_type,
            DraftField::FloorType => &mut self.floor_type,
            DraftField::Kitchens => &mut self.kitchens,
            DraftField::LivingRooms => &mut self.living_rooms,
            DraftField::Doors => &mut self.doors,
            DraftField::Windows => &mut self.windows,
            DraftField::ParkingSpaces => &mut self.parking_spaces,
            DraftField::UpperFloors => &mut self.upper_floors,
        }
    }

    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
            DraftField::County => &self.county,
            DraftField::Town => &self.town,
            DraftField::Bedrooms => &self.bedrooms,
            DraftField::Bathrooms => &self.bathrooms,
            DraftField::RoofType => &self.roof_type,
            DraftField::FloorType => &self.floor_type,
            DraftField::Kitchens => &self.kitchens,
            DraftField::LivingRooms => &self.living_rooms,
            DraftField::Doors => &self.doors,
            DraftField::Windows => &self.windows,
            DraftField::ParkingSpaces => &self.parking_spaces,
            DraftField::UpperFloors => &self.upper_floors,
        }
    }

    pub fn set_text(&mut self, field: DraftField, value: String) {
        *self.slot(field) = value;
    }

    /// Names of required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("title", &self.title), ("description", &self.description), ("price", &self.price)]
            .into_iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Multipart fields with nested keys flattened (`location.county`,
    /// `specs.bedrooms`). Blank values are left out.
    pub fn to_fields(&self) -> Vec<(String, String)> {
        let furnished = self.is_furnished.to_string();
        let entries: [(&str, &str); 18] = [
            ("title", &self.title),
            ("description", &self.description),
            ("price", &self.price),
            ("propertyType", self.property_type.as_str()),
            ("category", &self.category),
            ("location.county", &self.county),
            ("location.town", &self.town),
            ("specs.bedrooms", &self.bedrooms),
            ("specs.bathrooms", &self.bathrooms),
            ("specs.isFurnished", &furnished),
            ("specs.roofType", &self.roof_type),
            ("specs.floorType", &self.floor_type),
            ("specs.kitchens", &self.kitchens),
            ("specs.livingRooms", &self.living_rooms),
            ("specs.doors", &self.doors),
            ("specs.windows", &self.windows),
            ("specs.parkingSpaces", &self.parking_spaces),
            ("specs.upperFloors", &self.upper_floors),
        ];
        entries
            .into_iter()
            .map(|(k, v)| (k, v.trim()))
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}
