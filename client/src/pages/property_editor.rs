//! Admin create and edit routes around `PropertyForm`.

use leptos::prelude::*;

use crate::components::property_form::PropertyForm;
use crate::nav::ADMIN_PROPERTIES_PATH;
use crate::pages::property_detail::{PropertyLoad, use_property};
use crate::state::listings::PropertyDraft;

#[component]
pub fn NewPropertyPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <a class="admin-page__back" href=ADMIN_PROPERTIES_PATH>"← All properties"</a>
            <PropertyForm initial=PropertyDraft::default()/>
        </div>
    }
}

#[component]
pub fn EditPropertyPage() -> impl IntoView {
    let load = use_property();
    view! {
        <div class="admin-page">
            <a class="admin-page__back" href=ADMIN_PROPERTIES_PATH>"← All properties"</a>
            {move || match load.get() {
                PropertyLoad::Loading => view! { <p class="page-status">"Loading property..."</p> }.into_any(),
                PropertyLoad::Failed(message) => {
                    view! { <p class="page-status page-status--error">{message}</p> }.into_any()
                }
                PropertyLoad::Ready(property) => {
                    let initial = PropertyDraft::from_property(&property);
                    view! { <PropertyForm initial=initial property_id=property.id/> }.into_any()
                }
            }}
        </div>
    }
}
