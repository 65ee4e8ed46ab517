//! # client
//!
//! Leptos + WASM storefront client for Bagvo: sign-in, registration,
//! password reset, the account area and printable order invoices.
//!
//! The session store (`state::session`) and HTTP gateway (`net::gateway`)
//! carry the logic; `pages` and `app` are thin Leptos views over them.

pub mod app;
pub mod config;
pub mod invoice;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
