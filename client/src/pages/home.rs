//! Public landing page: featured listings and a search form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `GET /properties` on mount. Submitting the search form switches to
//! `GET /properties/search` with only the filled-in filters; clearing it goes
//! back to the featured list.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::nav::property_path;
use crate::net::types::{ListingKind, Property};
use crate::state::listings::{CATEGORIES, ListingsState, PropertyFilters};

/// How many listings the unfiltered landing grid shows.
pub const FEATURED_LIMIT: usize = 6;

/// Listings to render: everything for a search, the first few otherwise.
pub fn visible_listings(items: &[Property], searching: bool) -> &[Property] {
    if searching { items } else { &items[..items.len().min(FEATURED_LIMIT)] }
}

pub fn results_heading(count: usize, searching: bool) -> String {
    match (searching, count) {
        (false, _) => "Featured Properties".to_owned(),
        (true, 0) => "No properties match your search".to_owned(),
        (true, 1) => "1 property found".to_owned(),
        (true, n) => format!("{n} properties found"),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let listings = RwSignal::new(ListingsState::loading());
    let filters = RwSignal::new(PropertyFilters::default());
    let searching = RwSignal::new(false);

    let load = move |query: Option<String>| {
        listings.set(ListingsState::loading());
        searching.set(query.is_some());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::default();
            let result = match query.as_deref() {
                Some(q) => api.search_properties(q).await,
                None => api.fetch_properties().await,
            };
            listings.set(match result {
                Ok(items) => ListingsState::loaded(items),
                Err(e) => {
                    log::warn!("property listing failed: {e}");
                    ListingsState::failed("Failed to load properties")
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    Effect::new(move || load(None));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = filters.get();
        load((!current.is_empty()).then(|| current.to_query()));
    };

    let on_clear = move |_| {
        filters.set(PropertyFilters::default());
        load(None);
    };

    let text_filter = move |placeholder: &'static str, select: fn(&mut PropertyFilters) -> &mut String| {
        view! {
            <input
                class="search-form__input"
                placeholder=placeholder
                prop:value=move || {
                    let mut current = filters.get();
                    select(&mut current).clone()
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| *select(f) = value);
                }
            />
        }
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Find your next home in Kenya"</h1>
                <p>"Homes, apartments, land and offices for sale or rent."</p>
            </section>

            <form class="search-form" on:submit=on_search>
                {text_filter("County", |f| &mut f.county)}
                {text_filter("Town", |f| &mut f.town)}
                <select
                    class="search-form__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.property_type = value);
                    }
                >
                    <option value="">"Any type"</option>
                    <option value=ListingKind::Sale.as_str()>{ListingKind::Sale.label()}</option>
                    <option value=ListingKind::Rent.as_str()>{ListingKind::Rent.label()}</option>
                </select>
                <select
                    class="search-form__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.category = value);
                    }
                >
                    <option value="">"Any category"</option>
                    {CATEGORIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                </select>
                {text_filter("Min price", |f| &mut f.min_price)}
                {text_filter("Max price", |f| &mut f.max_price)}
                {text_filter("Bedrooms", |f| &mut f.bedrooms)}
                <button class="search-form__submit" type="submit">"Search"</button>
                <Show when=move || searching.get()>
                    <button class="search-form__clear" type="button" on:click=on_clear>"Clear"</button>
                </Show>
            </form>

            <section class="listing-grid">
                {move || {
                    let state = listings.get();
                    let is_search = searching.get();
                    if state.loading {
                        return view! { <p class="listing-grid__status">"Loading properties..."</p> }.into_any();
                    }
                    if let Some(error) = state.error {
                        return view! { <p class="listing-grid__status listing-grid__status--error">{error}</p> }
                            .into_any();
                    }
                    let shown = visible_listings(&state.items, is_search).to_vec();
                    view! {
                        <h2 class="listing-grid__heading">{results_heading(shown.len(), is_search)}</h2>
                        <div class="listing-grid__items">
                            {shown
                                .into_iter()
                                .map(|p| {
                                    let href = property_path(&p.id);
                                    view! { <PropertyCard property=p href=href/> }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}
