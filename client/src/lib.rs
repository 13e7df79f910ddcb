//! # client
//!
//! Leptos + WASM browser front end for the data catalogue: asset and object
//! management, catalogue search, validation tracking and workflow jobs.
//!
//! Domain records come from `records`; polling, grouping and formatting come
//! from `views`, so this crate is mostly wiring and markup. Browser-only code
//! sits behind the `csr` feature and native builds compile the same modules
//! for tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
