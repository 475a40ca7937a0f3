//! Create/edit form for a listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the admin "new" and "edit" routes. The draft is flattened into
//! multipart fields by `PropertyDraft::to_fields` and sent with the session's
//! bearer token; the backend decides whether the admin may write it.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::ListingKind;
use crate::state::listings::{CATEGORIES, DraftField, PropertyDraft};
use crate::state::session::AppSession;

/// Text input bound to one draft field.
#[component]
fn DraftInput(
    draft: RwSignal<PropertyDraft>,
    label: &'static str,
    field: DraftField,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="property-form__field">
            <span>{label}</span>
            <input
                class="property-form__input"
                type=kind
                prop:value=move || draft.with(|d| d.text(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.set_text(field, value));
                }
            />
        </label>
    }
}

#[component]
pub fn PropertyForm(initial: PropertyDraft, #[prop(optional)] property_id: Option<String>) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let draft = RwSignal::new(initial);
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let editing = property_id.is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let missing = draft.with(PropertyDraft::missing_required);
        if !missing.is_empty() {
            notice.set(format!("Required: {}", missing.join(", ")));
            return;
        }
        let Some(token) = session.with(|s| s.session().token().map(str::to_owned)) else {
            notice.set("Your session has ended. Sign in again.".to_owned());
            return;
        };
        busy.set(true);
        notice.set("Saving...".to_owned());

        let fields = draft.with(PropertyDraft::to_fields);
        let property_id = property_id.clone();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::default();
                match api.save_property(&token, property_id.as_deref(), &fields).await {
                    Ok(()) => {
                        log::info!("property saved");
                        navigate(crate::nav::ADMIN_PROPERTIES_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("property save failed: {e}");
                        notice.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, token, fields, property_id);
        }
    };

    view! {
        <form class="property-form" on:submit=on_submit>
            <h2 class="property-form__title">{if editing { "Edit Property" } else { "Add New Property" }}</h2>

            <DraftInput draft=draft label="Title *" field=DraftField::Title/>
            <DraftInput draft=draft label="Price (KES) *" kind="number" field=DraftField::Price/>
            <label class="property-form__field">
                <span>"Description *"</span>
                <textarea
                    class="property-form__input"
                    rows="3"
                    prop:value=move || draft.with(|d| d.text(DraftField::Description).to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.set_text(DraftField::Description, value));
                    }
                ></textarea>
            </label>

            <div class="property-form__row">
                <label class="property-form__field">
                    <span>"Type *"</span>
                    <select
                        class="property-form__input"
                        prop:value=move || draft.with(|d| d.property_type.as_str().to_owned())
                        on:change=move |ev| {
                            let kind = if event_target_value(&ev) == "rent" { ListingKind::Rent } else { ListingKind::Sale };
                            draft.update(|d| d.property_type = kind);
                        }
                    >
                        <option value="sale">{ListingKind::Sale.label()}</option>
                        <option value="rent">{ListingKind::Rent.label()}</option>
                    </select>
                </label>
                <label class="property-form__field">
                    <span>"Category *"</span>
                    <select
                        class="property-form__input"
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.category = value);
                        }
                    >
                        {CATEGORIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                    </select>
                </label>
            </div>

            <div class="property-form__row">
                <DraftInput draft=draft label="County" field=DraftField::County/>
                <DraftInput draft=draft label="Town" field=DraftField::Town/>
            </div>

            <fieldset class="property-form__specs">
                <legend>"Specifications"</legend>
                <DraftInput draft=draft label="Bedrooms" kind="number" field=DraftField::Bedrooms/>
                <DraftInput draft=draft label="Bathrooms" kind="number" field=DraftField::Bathrooms/>
                <DraftInput draft=draft label="Kitchens" kind="number" field=DraftField::Kitchens/>
                <DraftInput
                    draft=draft
                    label="Living rooms"
                    kind="number"
                    field=DraftField::LivingRooms
                />
                <DraftInput draft=draft label="Doors" kind="number" field=DraftField::Doors/>
                <DraftInput draft=draft label="Windows" kind="number" field=DraftField::Windows/>
                <DraftInput
                    draft=draft
                    label="Parking spaces"
                    kind="number"
                    field=DraftField::ParkingSpaces
                />
                <DraftInput
                    draft=draft
                    label="Upper floors"
                    kind="number"
                    field=DraftField::UpperFloors
                />
                <DraftInput draft=draft label="Roof type" field=DraftField::RoofType/>
                <DraftInput draft=draft label="Floor type" field=DraftField::FloorType/>
                <label class="property-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.is_furnished)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.is_furnished = checked);
                        }
                    />
                    <span>"Furnished"</span>
                </label>
            </fieldset>

            <Show when=move || !notice.get().is_empty()>
                <p class="property-form__notice">{move || notice.get()}</p>
            </Show>
            <button class="property-form__submit" type="submit" disabled=move || busy.get()>
                {if editing { "Update Property" } else { "Create Property" }}
            </button>
        </form>
    }
}
