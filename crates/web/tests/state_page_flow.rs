//! Black-box flow over the embedded site data: resolve a state, build its
//! page, stage products the way "Buy Now" does.

use sanskriti_cart::CartStore;
use sanskriti_catalog::{Product, RegionLookup};
use sanskriti_web::page::{StatePage, cart_lines};
use sanskriti_web::{ImageResolver, STATE_NOT_FOUND, SiteConfig, SiteData};

fn site() -> (SiteData, ImageResolver) {
    sanskriti_observability::init();
    let config = SiteConfig::default();
    (
        SiteData::load_embedded().expect("embedded data should load"),
        ImageResolver::new(config.asset_base),
    )
}

#[test]
fn rajasthan_resolves_with_two_products() {
    let (data, _) = site();
    match data.catalog.resolve("rajasthan") {
        RegionLookup::Found(region) => {
            assert_eq!(region.name, "Rajasthan");
            assert_eq!(region.products.len(), 2);
        }
        RegionLookup::NotFound => panic!("rajasthan should exist"),
    }
}

#[test]
fn atlantis_renders_fallback_and_has_no_cards() {
    let (data, images) = site();
    assert_eq!(data.catalog.resolve("atlantis"), RegionLookup::NotFound);
    assert!(data.cards.cards_for("atlantis").is_empty());

    match StatePage::for_route(&data, "atlantis", &images) {
        StatePage::NotFound { message } => assert_eq!(message, STATE_NOT_FOUND),
        StatePage::Found(_) => panic!("atlantis should not resolve"),
    }
}

#[test]
fn every_state_page_shows_its_own_products_and_cards() {
    let (data, images) = site();
    for region in data.catalog.regions() {
        let StatePage::Found(view) = StatePage::for_route(&data, region.id.as_str(), &images)
        else {
            panic!("{} should resolve", region.id);
        };
        assert_eq!(view.id, region.id);
        assert_eq!(view.products.len(), region.products.len());
        assert_eq!(view.heritage.len(), data.cards.cards_for(region.id.as_str()).len());
        assert!(view.products.iter().all(|tile| tile.region_id == region.id));
    }
}

#[test]
fn buy_now_appends_each_click() {
    let (data, images) = site();
    let StatePage::Found(view) = StatePage::for_route(&data, "rajasthan", &images) else {
        panic!("rajasthan should resolve");
    };

    let mut cart = CartStore::new();
    let first = view.products[0].product.clone();
    cart.add_product(first.clone());
    cart.add_product(first.clone());
    cart.add_product(view.products[1].product.clone());

    assert_eq!(cart.len(), 3);
    assert_eq!(cart.items()[0].product, first);
    assert_eq!(cart.items()[1].product, first);
    assert_eq!(cart_lines(&cart, &images).len(), 3);
}

#[test]
fn scarf_scenario_from_empty_cart() {
    let mut cart = CartStore::new();
    let scarf = Product::new("p1", "Scarf", "$10");
    cart.add_product(scarf.clone());

    assert_eq!(cart.products().cloned().collect::<Vec<_>>(), vec![scarf]);
}
