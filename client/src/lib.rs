//! # saints-client
//!
//! Leptos + WASM frontend for the Saints Lifestyle Apparel marketing site.
//!
//! This crate contains the site routes, the page components, the small
//! per-page state objects (nav menu, cart, accordion, lightbox, form
//! submission) and the form flows (contact, enquiry, home contact). Browser
//! glue lives behind the `hydrate` feature so every state transition and form
//! rule stays testable natively.

pub mod app;
pub mod catalog;
pub mod components;
pub mod content;
pub mod forms;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
