//! # liftlog
//!
//! Leptos + WASM client shell for the workout routine tracker.
//!
//! The crate decides who the visitor is and what they may see: the session
//! is restored from browser storage at startup, shared with screens through
//! a single reactive handle, and every route is wrapped in a gate that
//! redirects anonymous visitors away from protected screens.
//!
//! Pure logic (`session`, `routes`, `config`) builds and tests natively; the
//! browser entry point and `localStorage` backend are behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
