//! # client
//!
//! Leptos + WASM frontend for the property marketplace console.
//!
//! This crate contains pages, components, session state, the route guard,
//! and the authenticated REST layer. The server crate renders the shell and
//! the `hydrate` entry point below takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
