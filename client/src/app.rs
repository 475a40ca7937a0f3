//! Root application component with routing, session context, and chrome.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the one `SessionStore` and provides it as `AppSession`. `Shell`
//! sits inside the router so it can derive chrome from the current path;
//! `AdminGuard` wraps every admin-zone route and renders nothing privileged
//! until the route guard allows it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{
    admin_sidebar::AdminSidebar, chat_assistant::ChatAssistant, footer::Footer, navbar::Navbar,
};
use crate::nav::{HOME_PATH, Zone, chrome_for, zone_for_path};
use crate::pages::{
    admin_dashboard::AdminDashboardPage,
    admin_properties::AdminPropertiesPage,
    forgot_password::ForgotPasswordPage,
    home::HomePage,
    login::LoginPage,
    property_detail::{AdminPropertyDetailPage, PropertyDetailPage},
    property_editor::{EditPropertyPage, NewPropertyPage},
    register::RegisterPage,
    reset_password::ResetPasswordPage,
};
use crate::state::session::{AppSession, SessionStore};
use crate::util::guard::{GuardDecision, guard_decision, install_guard_redirect};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: AppSession = RwSignal::new(SessionStore::new(BrowserStorage));
    provide_context(session);

    // Effects only run in the browser, so SSR always renders the Unknown phase.
    Effect::new(move || session.update(SessionStore::initialize));

    view! {
        <Stylesheet id="leptos" href="/pkg/home254.css"/>
        <Title text="Home254"/>

        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                    <Route path=(StaticSegment("property"), ParamSegment("id")) view=PropertyDetailPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <AdminGuard><AdminDashboardPage/></AdminGuard> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("properties"))
                        view=|| view! { <AdminGuard><AdminPropertiesPage/></AdminGuard> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("properties"), StaticSegment("new"))
                        view=|| view! { <AdminGuard><NewPropertyPage/></AdminGuard> }
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("properties"),
                            StaticSegment("edit"),
                            ParamSegment("id"),
                        )
                        view=|| view! { <AdminGuard><EditPropertyPage/></AdminGuard> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("properties"), ParamSegment("id"))
                        view=|| view! { <AdminGuard><AdminPropertyDetailPage/></AdminGuard> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Chrome around the routed view: public header, footer and assistant, or the
/// admin sidebar once the guard allows the admin zone.
#[component]
fn Shell(children: Children) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let pathname = use_location().pathname;
    let admin_allowed = guard_decision(session, Zone::Admin);

    let chrome = Memo::new(move |_| {
        let authenticated = session.with(|s| s.session().is_authenticated());
        chrome_for(zone_for_path(&pathname.get()), authenticated)
    });

    view! {
        <div class="app-shell" class:app-shell--admin=move || chrome.get().sidebar>
            <Show when=move || chrome.get().header>
                <Navbar/>
            </Show>
            <Show when=move || chrome.get().sidebar && admin_allowed.get() == GuardDecision::Allow>
                <AdminSidebar/>
            </Show>
            <main class="app-shell__content">{children()}</main>
            <Show when=move || chrome.get().footer>
                <Footer/>
            </Show>
            <Show when=move || chrome.get().assistant>
                <ChatAssistant/>
            </Show>
        </div>
    }
}

/// Gate for admin-zone views. Redirects with history replacement so the
/// back button does not return to the refused page.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let decision = guard_decision(session, Zone::Admin);
    install_guard_redirect(decision, use_navigate());

    let placeholder = move || {
        let text = match decision.get() {
            GuardDecision::Loading => "Checking your session...",
            _ => "Redirecting...",
        };
        view! { <p class="page-status">{text}</p> }
    };

    view! {
        <Show when=move || decision.get() == GuardDecision::Allow fallback=placeholder>
            {children()}
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-status">
            <h1>"Page not found"</h1>
            <a href=HOME_PATH>"Back to listings"</a>
        </div>
    }
}
