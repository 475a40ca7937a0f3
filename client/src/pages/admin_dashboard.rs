//! Admin landing page with shortcuts into listing management.

use leptos::prelude::*;

use crate::nav::{ADMIN_NEW_PROPERTY_PATH, ADMIN_PROPERTIES_PATH};
use crate::state::session::AppSession;

const SHORTCUTS: [(&str, &str, &str); 2] = [
    (ADMIN_NEW_PROPERTY_PATH, "Add Property", "Publish a new listing with photos and specs."),
    (ADMIN_PROPERTIES_PATH, "All Properties", "Review, edit, or remove existing listings."),
];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let name = move || {
        session.with(|s| {
            s.session()
                .identity()
                .map(|i| i.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "admin".to_owned())
        })
    };

    view! {
        <div class="admin-page">
            <h1 class="admin-page__title">{move || format!("Welcome, {}", name())}</h1>
            <div class="admin-dashboard__cards">
                {SHORTCUTS
                    .into_iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <a class="admin-dashboard__card" href=href>
                                <h2>{title}</h2>
                                <p>{blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
