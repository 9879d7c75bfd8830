//! # client
//!
//! Leptos + WASM frontend for SmartShelf.
//!
//! This crate contains the route table, the session state, the navigation
//! guard, and one page per route. The `ssr` feature renders it on the server;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
