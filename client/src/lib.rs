//! # client
//!
//! Leptos + WASM frontend for the creator dashboard.
//!
//! This crate holds the session store, the API facade, the role and
//! profile-completion gates, and the pages they protect. Gate decisions are
//! plain functions in `util`; components only apply them reactively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod paths;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
