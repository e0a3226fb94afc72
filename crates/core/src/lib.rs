//! `sanskriti-core` — shared building blocks for the catalog site.
//!
//! This crate contains **pure domain** primitives (no rendering, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, ensure_unique_ids};
pub use error::{CatalogError, CatalogResult};
pub use id::{CartLineId, ProductId, RegionId};
pub use value_object::ValueObject;
