//! Admin-zone side navigation.
//!
//! Rendered by the shell only after the route guard allows the admin zone.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::nav::{ADMIN_NEW_PROPERTY_PATH, ADMIN_PATH, ADMIN_PROPERTIES_PATH, HOME_PATH};
use crate::state::session::AppSession;

const LINKS: [(&str, &str); 3] = [
    (ADMIN_PATH, "Dashboard"),
    (ADMIN_NEW_PROPERTY_PATH, "Add Property"),
    (ADMIN_PROPERTIES_PATH, "All Properties"),
];

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let collapsed = RwSignal::new(false);

    let on_logout = move |_| {
        session.update(|s| s.logout());
        navigate(HOME_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="admin-sidebar" class:admin-sidebar--collapsed=move || collapsed.get()>
            <button
                class="admin-sidebar__toggle"
                title="Toggle sidebar"
                aria-label="Toggle sidebar"
                on:click=move |_| collapsed.update(|c| *c = !*c)
            >
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>
            <nav class="admin-sidebar__nav">
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        let active = move || pathname.get() == href;
                        view! {
                            <a class="admin-sidebar__link" class:admin-sidebar__link--active=active href=href>
                                <span class="admin-sidebar__label" class:hidden=move || collapsed.get()>
                                    {label}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="admin-sidebar__logout" on:click=on_logout>"Logout"</button>
        </aside>
    }
}
