//! Public header with session-aware account actions.

use leptos::prelude::*;

use crate::nav::{ADMIN_PATH, HOME_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::state::session::AppSession;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let authenticated = move || session.with(|s| s.session().is_authenticated());
    let is_admin = move || session.with(|s| s.session().identity().is_some_and(|i| i.is_admin()));
    let greeting = move || {
        session.with(|s| s.session().identity().map(|i| i.name.clone()).filter(|n| !n.is_empty()))
    };

    // The link itself routes home; the handler only drops the session.
    let on_logout = move |_| session.update(|s| s.logout());

    view! {
        <header class="navbar">
            <a class="navbar__brand" href=HOME_PATH>"Home254"</a>
            <div class="navbar__actions">
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <a class="navbar__link" href=LOGIN_PATH>"Login"</a>
                            <a class="navbar__button" href=REGISTER_PATH>"Register"</a>
                        }
                    }
                >
                    {move || greeting().map(|name| view! { <span class="navbar__greeting">{name}</span> })}
                    <Show when=is_admin>
                        <a class="navbar__link" href=ADMIN_PATH>"Dashboard"</a>
                    </Show>
                    <a class="navbar__button" href=HOME_PATH on:click=on_logout>"Logout"</a>
                </Show>
            </div>
        </header>
    }
}
