//! # client
//!
//! Leptos + WASM frontend for the Home254 property listing site.
//!
//! This crate contains pages, components, the session store, auth actions,
//! the route guard, and the REST client for the property backend. The
//! `server` crate renders it with SSR; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
