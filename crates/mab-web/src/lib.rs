//! MAB AI Strategies Web Frontend
//!
//! Leptos-based WASM frontend: marketing pages, the live ROI calculator and
//! the contact form. Figures come from `mab-core` so the browser and the
//! server agree on every number and validation message.

mod analytics;
mod api;
mod app;
mod charts;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
