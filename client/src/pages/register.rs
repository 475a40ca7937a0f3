//! Account registration page.
//!
//! A successful registration signs the user in, shows a short confirmation,
//! then moves on to the user's landing path.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::nav::LOGIN_PATH;
use crate::state::actions::RegistrationForm;
use crate::state::session::AppSession;

/// Pause between the success notice and the redirect.
pub const REDIRECT_DELAY_MS: u32 = 1500;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegistrationForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let values = form.get();
        if let Err(e) = crate::state::actions::validate_registration(&values) {
            info.set(e.user_message());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                match crate::state::actions::register(&api, &session, &values).await {
                    Ok(credentials) => {
                        info.set("Registration successful! Redirecting...".to_owned());
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate(crate::nav::landing_path(&credentials.identity), NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session, values);
        }
    };

    let field = move |placeholder: &'static str, kind: &'static str, select: fn(&mut RegistrationForm) -> &mut String| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *select(f) = value);
                }
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full name", "text", |f| &mut f.name)}
                    {field("you@example.com", "email", |f| &mut f.email)}
                    {field("WhatsApp number", "tel", |f| &mut f.contact)}
                    {field("Password (min 6 characters)", "password", |f| &mut f.password)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href=LOGIN_PATH>"Already have an account? Sign in"</a>
                </div>
            </div>
        </div>
    }
}
