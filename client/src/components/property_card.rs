//! Listing card used on the home grid and admin list.

use leptos::prelude::*;

use crate::net::types::{Property, format_price};

/// A card linking to `href`. When `on_delete` is given a delete button is shown.
#[component]
pub fn PropertyCard(
    property: Property,
    href: String,
    #[prop(optional)] edit_href: Option<String>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let cover = property.cover_image().to_owned();
    let price = format_price(property.price);
    let kind = property.property_type.label();
    let place = [property.location.town.as_str(), property.location.county.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let bedrooms = property.specs.bedrooms.map(|n| format!("{n} bd"));
    let id = property.id.clone();

    view! {
        <article class="property-card">
            <a class="property-card__link" href=href>
                <img class="property-card__image" src=cover alt=property.title.clone() loading="lazy"/>
                <span class="property-card__badge">{kind}</span>
                <h3 class="property-card__title">{property.title.clone()}</h3>
                <p class="property-card__place">{place}</p>
                <p class="property-card__price">{price}</p>
                {bedrooms.map(|b| view! { <span class="property-card__meta">{b}</span> })}
            </a>
            {(edit_href.is_some() || on_delete.is_some())
                .then(|| {
                    view! {
                        <div class="property-card__actions">
                            {edit_href.map(|h| view! { <a class="property-card__edit" href=h>"Edit"</a> })}
                            {on_delete.map(|cb| {
                                let id = id.clone();
                                view! {
                                    <button
                                        class="property-card__delete"
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.prevent_default();
                                            cb.run(id.clone());
                                        }
                                    >
                                        "Delete"
                                    </button>
                                }
                            })}
                        </div>
                    }
                })}
        </article>
    }
}
