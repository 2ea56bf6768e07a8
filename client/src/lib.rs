//! # client
//!
//! Leptos + WASM frontend for MediData, a healthcare provider matching
//! service. Pages talk to the MediData HTTP API directly from the browser;
//! the session (bearer token plus cached profile) lives in local storage.
//!
//! The structured core is `session` (persisted store, same-tab broadcast,
//! cross-tab bridge) and `guard` (render-or-redirect decisions). Everything
//! else is page plumbing over `net`.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
