//! # hostel-client
//!
//! Leptos + WASM frontend for the hostel management system.
//!
//! This crate contains pages, layout components, the auth-session state, the
//! role-aware route guard, and the REST client for the hosted auth service.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
