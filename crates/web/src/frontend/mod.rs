//! Leptos frontend (client-side rendered).

pub mod app;
pub mod components;
pub mod pages;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::data::SiteData;
use crate::frontend::app::App;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    sanskriti_observability::init();

    let config = SiteConfig::from_build_env();
    match SiteData::load_embedded() {
        Ok(data) => mount_to_body(move || view! { <App data=data config=config/> }),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "failed to load site data");
            mount_to_body(|| view! { <p class="load-error">"The catalog could not be loaded."</p> })
        }
    }
}
