//! # meridian
//!
//! Leptos + WASM front end for the Meridian business suite: CRM, finance,
//! banking, HR, inventory, manufacturing, and sourcing screens over
//! in-memory mock data.
//!
//! Every list page renders through one generic `ListScreen` and every
//! create page through one generic `FormScreen`; the per-entity
//! differences are plain configuration. The filter/paginate/aggregate,
//! form-validation, totals, repository, and toast models live in the
//! `records` crate so they stay testable without a DOM.

pub mod app;
pub mod components;
pub mod domain;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: mounts the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
