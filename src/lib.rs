//! # codementor-client
//!
//! Leptos + WASM frontend for the CodeMentor coding-practice platform.
//! Four screens — login, signup, dashboard, and AI feedback — each a thin
//! presentation layer that authenticates with a bearer token, issues REST
//! calls to the backend, and renders the JSON response.
//!
//! This crate contains pages, components, application state, and the
//! network layer. All business logic (test execution, AI analysis,
//! complexity scoring) lives in the external backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
