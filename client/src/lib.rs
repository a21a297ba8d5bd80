//! # client
//!
//! Leptos + WASM frontend for the Calidad HYP quality-review workflow.
//!
//! This crate contains the page, components, reactive state wiring, and the
//! browser implementation of `quality::QualityApi`. Domain rules (filtering,
//! review stages, the store's actions) live in the `quality` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
