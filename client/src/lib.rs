//! # client
//!
//! Leptos + WASM frontend for the line mapper.
//!
//! Two routes share one canvas component: the line-mapper page draws
//! segments typed by the user, and the campus-paths page draws the route
//! returned by the external routing service. Both hand their segments to
//! the `canvas` crate through the `MapView` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: wire logging and panic reporting, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already installed: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
