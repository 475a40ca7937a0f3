//! Complete a password reset from an emailed link.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::nav::LOGIN_PATH;
use crate::state::session::AppSession;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let params = use_params_map();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token = params.with_untracked(|p| p.get("token")).unwrap_or_default();
        let password_value = password.get();
        let confirm_value = confirm.get();
        if let Err(e) = crate::state::actions::validate_new_password(&password_value, &confirm_value) {
            info.set(e.user_message());
            return;
        }
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::actions::ResetOutcome;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                let result =
                    crate::state::actions::reset_password(&api, &session, &token, &password_value, &confirm_value)
                        .await;
                match result {
                    Ok(ResetOutcome::SignedIn(credentials)) => {
                        navigate(crate::nav::landing_path(&credentials.identity), NavigateOptions::default());
                    }
                    Ok(ResetOutcome::PasswordChanged) => {
                        info.set("Password updated. Sign in with your new password.".to_owned());
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    Err(e) => info.set(e.user_message()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session, token);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Reset password"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-card__links">
                    <a href=LOGIN_PATH>"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
