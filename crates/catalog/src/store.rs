//! Catalog Store: immutable region collection + the region resolver.

use std::collections::HashMap;

use sanskriti_core::{CatalogResult, RegionId, ensure_unique_ids};

use crate::region::{Product, ProductCategory, Region};

/// Outcome of resolving a route identifier against the catalog.
///
/// Absence is an ordinary outcome the page must render, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLookup<'a> {
    Found(&'a Region),
    NotFound,
}

impl<'a> RegionLookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, RegionLookup::Found(_))
    }

    pub fn region(self) -> Option<&'a Region> {
        match self {
            RegionLookup::Found(region) => Some(region),
            RegionLookup::NotFound => None,
        }
    }
}

/// Static, validated collection of regions in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    regions: Vec<Region>,
    index: HashMap<RegionId, usize>,
}

impl CatalogStore {
    /// Build a store from already-typed regions, validating every record.
    pub fn new(regions: Vec<Region>) -> CatalogResult<Self> {
        for region in &regions {
            region.validate()?;
        }
        ensure_unique_ids(&regions, |id| format!("region '{id}'"))?;

        let index = regions
            .iter()
            .enumerate()
            .map(|(pos, region)| (region.id.clone(), pos))
            .collect();
        Ok(Self { regions, index })
    }

    /// Parse and validate the `states.json` document (a JSON array of regions).
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let regions: Vec<Region> = serde_json::from_str(json)?;
        let store = Self::new(regions)?;
        tracing::info!(
            regions = store.regions.len(),
            products = store.product_count(),
            "catalog loaded"
        );
        Ok(store)
    }

    /// Resolve a route identifier. Exact, case-sensitive match; no trimming.
    pub fn resolve(&self, id: &str) -> RegionLookup<'_> {
        match self.index.get(id) {
            Some(&pos) => RegionLookup::Found(&self.regions[pos]),
            None => {
                tracing::debug!(region_id = id, "region not found");
                RegionLookup::NotFound
            }
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn product_count(&self) -> usize {
        self.regions.iter().map(|r| r.products.len()).sum()
    }

    /// All products of a category across regions, paired with their owner,
    /// in catalog order.
    pub fn products_in(&self, category: ProductCategory) -> Vec<(&Region, &Product)> {
        self.regions
            .iter()
            .flat_map(|region| {
                region
                    .products
                    .iter()
                    .filter(move |p| p.is_in(category))
                    .map(move |p| (region, p))
            })
            .collect()
    }
}
