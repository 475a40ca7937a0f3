//! Single listing view, shared by the public and admin detail routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `use_property` loads `GET /properties/{id}` whenever the `:id` route
//! parameter changes. Public and admin detail pages differ only in the
//! actions rendered under the listing.

#[cfg(test)]
#[path = "property_detail_test.rs"]
mod property_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::nav::{ADMIN_PROPERTIES_PATH, HOME_PATH, admin_edit_property_path};
use crate::net::types::{Property, Specs, format_price};

/// Load state of a single listing.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyLoad {
    Loading,
    Ready(Property),
    Failed(String),
}

/// Label/value rows for the specification table. Unknown counts are skipped.
pub fn spec_rows(specs: &Specs) -> Vec<(&'static str, String)> {
    let counts = [
        ("Bedrooms", specs.bedrooms),
        ("Bathrooms", specs.bathrooms),
        ("Kitchens", specs.kitchens),
        ("Living rooms", specs.living_rooms),
        ("Doors", specs.doors),
        ("Windows", specs.windows),
        ("Parking spaces", specs.parking_spaces),
        ("Upper floors", specs.upper_floors),
    ];
    let mut rows: Vec<(&'static str, String)> =
        counts.into_iter().filter_map(|(label, n)| n.map(|n| (label, n.to_string()))).collect();
    for (label, value) in [("Roof", &specs.roof_type), ("Floor", &specs.floor_type)] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            rows.push((label, value.to_owned()));
        }
    }
    rows.push(("Furnished", if specs.is_furnished { "Yes" } else { "No" }.to_owned()));
    rows
}

/// Track the `:id` route parameter and load the matching listing.
pub fn use_property() -> RwSignal<PropertyLoad> {
    let params = use_params_map();
    let load = RwSignal::new(PropertyLoad::Loading);
    Effect::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        load.set(PropertyLoad::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::default();
            load.set(match api.fetch_property(&id).await {
                Ok(property) => PropertyLoad::Ready(property),
                Err(e) => {
                    log::warn!("property {id} failed to load: {e}");
                    PropertyLoad::Failed(e.to_string())
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });
    load
}

#[component]
fn PropertyView(property: Property) -> impl IntoView {
    let images = property.images.clone();
    let cover = property.cover_image().to_owned();
    let place = format!("{}, {}", property.location.town, property.location.county);
    let rows = spec_rows(&property.specs);

    view! {
        <article class="property-detail">
            <img class="property-detail__cover" src=cover alt=property.title.clone()/>
            <div class="property-detail__gallery">
                {images
                    .into_iter()
                    .skip(1)
                    .map(|src| view! { <img class="property-detail__thumb" src=src loading="lazy"/> })
                    .collect_view()}
            </div>
            <header class="property-detail__header">
                <span class="property-detail__badge">{property.property_type.label()}</span>
                <h1>{property.title.clone()}</h1>
                <p class="property-detail__place">{place}</p>
                <p class="property-detail__price">{format_price(property.price)}</p>
            </header>
            <p class="property-detail__description">{property.description.clone()}</p>
            <table class="property-detail__specs">
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
                        .collect_view()}
                </tbody>
            </table>
        </article>
    }
}

/// Render `load`, with `actions` under a ready listing.
fn render_load(load: PropertyLoad, actions: impl FnOnce(&Property) -> AnyView) -> AnyView {
    match load {
        PropertyLoad::Loading => view! { <p class="page-status">"Loading property..."</p> }.into_any(),
        PropertyLoad::Failed(message) => {
            view! { <p class="page-status page-status--error">{message}</p> }.into_any()
        }
        PropertyLoad::Ready(property) => {
            let extra = actions(&property);
            view! {
                <PropertyView property=property/>
                {extra}
            }
            .into_any()
        }
    }
}

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let load = use_property();
    view! {
        <div class="property-page">
            <a class="property-page__back" href=HOME_PATH>"← Back to listings"</a>
            {move || render_load(load.get(), |_| ().into_any())}
        </div>
    }
}

#[component]
pub fn AdminPropertyDetailPage() -> impl IntoView {
    let load = use_property();
    view! {
        <div class="admin-page">
            <a class="admin-page__back" href=ADMIN_PROPERTIES_PATH>"← All properties"</a>
            {move || {
                render_load(
                    load.get(),
                    |property| {
                        let href = admin_edit_property_path(&property.id);
                        view! { <a class="admin-page__button" href=href>"Edit property"</a> }.into_any()
                    },
                )
            }}
        </div>
    }
}
