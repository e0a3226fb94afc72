//! Page models: what each route shows, independent of the UI framework.
//!
//! The Leptos components only walk these structures, so everything a page
//! decides (fallbacks, fact rows, image URLs, link targets) is testable
//! without a browser.

use sanskriti_cart::CartStore;
use sanskriti_catalog::{Card, CatalogStore, Product, ProductCategory, Region, RegionLookup};
use sanskriti_core::{CartLineId, RegionId};

use crate::config::SiteConfig;
use crate::data::SiteData;
use crate::images::ImageResolver;

/// Fallback text for an unknown `stateId`.
pub const STATE_NOT_FOUND: &str = "State not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeritageCard {
    pub image: Option<String>,
    pub title: String,
    pub description: String,
}

/// A product with everything its tile needs, including the snapshot that
/// "Buy Now" stages into the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTile {
    pub region_id: RegionId,
    pub region_name: String,
    pub image: Option<String>,
    pub product: Product,
}

impl ProductTile {
    fn new(region: &Region, product: &Product, images: &ImageResolver) -> Self {
        Self {
            region_id: region.id.clone(),
            region_name: region.name.clone(),
            image: images.resolve(&product.image),
            product: product.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateView {
    pub id: RegionId,
    pub name: String,
    pub hero_image: Option<String>,
    pub description: String,
    pub facts: Vec<Fact>,
    pub heritage: Vec<HeritageCard>,
    pub products: Vec<ProductTile>,
}

/// The `/states/:stateId` page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatePage {
    Found(StateView),
    NotFound { message: &'static str },
}

impl StatePage {
    /// Resolve the route id and build the page from the site data.
    pub fn for_route(data: &SiteData, region_id: &str, images: &ImageResolver) -> Self {
        Self::assemble(
            data.catalog.resolve(region_id),
            data.cards.cards_for(region_id),
            images,
        )
    }

    pub fn assemble(lookup: RegionLookup<'_>, cards: &[Card], images: &ImageResolver) -> Self {
        let Some(region) = lookup.region() else {
            return StatePage::NotFound {
                message: STATE_NOT_FOUND,
            };
        };

        let facts = vec![
            Fact {
                label: "Capital",
                value: region.capital.clone(),
            },
            Fact {
                label: "Language",
                value: region.language.clone(),
            },
            Fact {
                label: "Area",
                value: region.area.clone(),
            },
            Fact {
                label: "Population",
                value: region.population.clone(),
            },
        ];

        let heritage = cards
            .iter()
            .map(|card| HeritageCard {
                image: images.resolve(&card.image_src),
                title: card.title.clone(),
                description: card.description.clone(),
            })
            .collect();

        let products = region
            .products
            .iter()
            .map(|product| ProductTile::new(region, product, images))
            .collect();

        StatePage::Found(StateView {
            id: region.id.clone(),
            name: region.name.clone(),
            hero_image: images.resolve(&region.image_name),
            description: region.description.clone(),
            facts,
            heritage,
            products,
        })
    }
}

/// Entry in the home page's state carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTile {
    pub name: String,
    pub image: Option<String>,
    pub href: String,
}

pub fn region_tiles(catalog: &CatalogStore, images: &ImageResolver) -> Vec<RegionTile> {
    catalog
        .regions()
        .iter()
        .map(|region| RegionTile {
            name: region.name.clone(),
            image: images.resolve(&region.image_name),
            href: SiteConfig::state_path(region.id.as_str()),
        })
        .collect()
}

/// The `/jewelry` and `/apparels` pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub title: &'static str,
    pub tiles: Vec<ProductTile>,
}

impl CategoryPage {
    pub fn assemble(
        catalog: &CatalogStore,
        category: ProductCategory,
        images: &ImageResolver,
    ) -> Self {
        Self {
            title: category.as_str(),
            tiles: catalog
                .products_in(category)
                .into_iter()
                .map(|(region, product)| ProductTile::new(region, product, images))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub line_id: CartLineId,
    pub name: String,
    pub price: String,
    pub image: Option<String>,
}

pub fn cart_lines(cart: &CartStore, images: &ImageResolver) -> Vec<CartLine> {
    cart.items()
        .iter()
        .map(|item| CartLine {
            line_id: item.line_id,
            name: item.product.name.clone(),
            price: item.product.price.clone(),
            image: images.resolve(&item.product.image),
        })
        .collect()
}
