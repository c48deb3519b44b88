//! ESP-NOW Solutions marketing site.
//!
//! A single-page Leptos site: hero, services, industries, and the
//! contact form, served with axum under the `ssr` feature and hydrated
//! in the browser under `hydrate`.

pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod fileserv;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(App);
}
