//! Floating assistant launcher for signed-in visitors.
//!
//! The conversation backend is not wired up; the panel only explains where
//! to get help. The shell decides visibility via `chrome_for`.

use leptos::prelude::*;

#[component]
pub fn ChatAssistant() -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="chat-assistant">
            <Show when=move || open.get()>
                <div class="chat-assistant__panel" role="dialog" aria-label="Property assistant">
                    <div class="chat-assistant__header">
                        <span>"Property Assistant"</span>
                        <button class="chat-assistant__close" on:click=move |_| open.set(false)>"✕"</button>
                    </div>
                    <p class="chat-assistant__body">
                        "Ask about listings by county, price, or number of bedrooms. "
                        "Our agents will follow up on WhatsApp."
                    </p>
                </div>
            </Show>
            <button
                class="chat-assistant__launcher"
                title="Open assistant"
                aria-label="Open assistant"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "💬"
            </button>
        </div>
    }
}
