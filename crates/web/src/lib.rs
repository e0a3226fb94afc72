//! `sanskriti-web`
//!
//! **Responsibility:** the browser shell of the catalog site.
//!
//! This crate provides:
//! - Site configuration and the embedded static data
//! - Image reference resolution
//! - Framework-independent page models (state page, category pages, cart)
//! - The Leptos CSR frontend (wasm32 only)

pub mod config;
pub mod data;
pub mod images;
pub mod page;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::SiteConfig;
pub use data::SiteData;
pub use images::ImageResolver;
pub use page::{CategoryPage, STATE_NOT_FOUND, StatePage};
