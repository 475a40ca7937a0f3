//! Admin listing table with delete.
//!
//! Deletion asks for confirmation, sends the session's bearer token, and
//! drops the row locally on success. The backend refuses listings the admin
//! does not own; that refusal is shown as a notice.

use leptos::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::nav::{ADMIN_NEW_PROPERTY_PATH, admin_edit_property_path, admin_property_path};
use crate::state::listings::ListingsState;
use crate::state::session::AppSession;

#[component]
pub fn AdminPropertiesPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let listings = RwSignal::new(ListingsState::loading());
    let notice = RwSignal::new(String::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::default();
            listings.set(match api.fetch_properties().await {
                Ok(items) => ListingsState::loaded(items),
                Err(e) => {
                    log::warn!("admin property list failed: {e}");
                    ListingsState::failed("Failed to load properties")
                }
            });
        });
    });

    let on_delete = Callback::new(move |id: String| {
        let Some(token) = session.with_untracked(|s| s.session().token().map(str::to_owned)) else {
            notice.set("Your session has ended. Sign in again.".to_owned());
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this property? This cannot be undone.").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                match api.delete_property(&token, &id).await {
                    Ok(()) => {
                        listings.update(|l| l.remove(&id));
                        notice.set("Property deleted.".to_owned());
                    }
                    Err(e) => {
                        log::warn!("delete {id} failed: {e}");
                        notice.set(e.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
        }
    });

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <h1 class="admin-page__title">"All Properties"</h1>
                <a class="admin-page__button" href=ADMIN_NEW_PROPERTY_PATH>"Add Property"</a>
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="admin-page__notice">{move || notice.get()}</p>
            </Show>
            {move || {
                let state = listings.get();
                if state.loading {
                    return view! { <p class="page-status">"Loading properties..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="page-status page-status--error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p class="page-status">"No properties yet."</p> }.into_any();
                }
                view! {
                    <div class="listing-grid__items">
                        {state
                            .items
                            .into_iter()
                            .map(|p| {
                                let href = admin_property_path(&p.id);
                                let edit_href = admin_edit_property_path(&p.id);
                                view! { <PropertyCard property=p href=href edit_href=edit_href on_delete=on_delete/> }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
