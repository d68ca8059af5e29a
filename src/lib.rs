//! # donation-client
//!
//! Leptos + WASM frontend for the donation platform: sign-in/sign-up, the
//! navigation shell, donation and contact forms, profile and donation history.
//!
//! The session lifecycle (token storage, client-side expiry checks, forced
//! sign-in on expiry) lives in `session` and is shared by every page. Form
//! pages are thin views over the `state::form` workflow, which talks to the
//! backend through `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: installs panic/log hooks and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
