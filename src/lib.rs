//! # widget-deck
//!
//! Leptos + WASM single-page app bundling a counter, a validated profile
//! form, and a rich-text editor behind client-side routing, with a
//! light/dark theme toggle.
//!
//! Every widget persists through the `storage` crate's gateway over browser
//! `localStorage`; nothing talks to the raw store directly.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
