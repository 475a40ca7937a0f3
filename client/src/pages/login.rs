//! Email + password sign-in page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::nav::{FORGOT_PASSWORD_PATH, REGISTER_PATH};
use crate::state::session::AppSession;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if let Err(e) = crate::state::actions::validate_login(&email_value, &password_value) {
            info.set(e.user_message());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                match crate::state::actions::login(&api, &session, &email_value, &password_value).await {
                    Ok(credentials) => {
                        info.set(String::new());
                        navigate(crate::nav::landing_path(&credentials.identity), NavigateOptions::default());
                    }
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your listings"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href=FORGOT_PASSWORD_PATH>"Forgot password?"</a>
                    <a href=REGISTER_PATH>"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
