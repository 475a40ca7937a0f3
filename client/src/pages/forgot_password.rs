//! Start a password reset by email.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::nav::{AppRoute, LOGIN_PATH};

/// Notice shown after the backend accepted the request.
pub fn reset_requested_notice(echoed_token: Option<&str>) -> String {
    match echoed_token {
        Some(_) => "Reset link generated. Use the link below to continue.".to_owned(),
        None => "If that email is registered, a reset link is on its way.".to_owned(),
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_token = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            info.set("Enter your email first.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Sending request...".to_owned());
        echoed_token.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::default();
            match crate::state::actions::request_password_reset(&api, &email_value).await {
                Ok(token) => {
                    info.set(reset_requested_notice(token.as_deref()));
                    echoed_token.set(token);
                }
                Err(e) => info.set(e.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                {move || {
                    echoed_token
                        .get()
                        .map(|token| {
                            let href = AppRoute::ResetPassword { token }.path();
                            view! { <a class="auth-message auth-message--link" href=href>"Reset your password"</a> }
                        })
                }}
                <div class="auth-card__links">
                    <a href=LOGIN_PATH>"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
