//! Catalog domain module.
//!
//! Regions (states) with their nested products, the heritage-card association
//! store, and the lookups the pages are built from. Pure, synchronous,
//! in-memory logic: no rendering and no IO beyond parsing a JSON string.

pub mod cards;
pub mod region;
pub mod store;

pub use cards::{Card, CardGroup, CardStore};
pub use region::{Product, ProductCategory, Region};
pub use store::{CatalogStore, RegionLookup};
