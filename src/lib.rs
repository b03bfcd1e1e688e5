//! # learnbridge-client
//!
//! Leptos + WASM front end for the LearnBridge education platform: sign-in and
//! registration, a role-gated dashboard, the AI rubric generator, and the
//! admin curriculum upload page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The heart of the crate is the persisted authentication session in
//! `state::session`. It survives reloads through browser `localStorage`,
//! rehydrates once at startup under a timeout, and gates every protected
//! route through `util::route_guard`. Everything else is a form that
//! validates input, calls a remote service in `net`, and reports the outcome.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
