//! Shared building blocks: page layout and product/heritage tiles.

use leptos::*;
use leptos_router::*;

use crate::frontend::app::use_site;
use crate::page::{HeritageCard, ProductTile};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let site = use_site();
    let cart = site.cart;
    let cart_path = site.config.cart_path.clone();

    view! {
        <header class="site-header">
            <A href="/" class="brand">"Sanskriti"</A>
            <nav>
                <A href="/jewelry">"Jewelry"</A>
                <A href="/apparels">"Apparels"</A>
                <A href=cart_path>{move || format!("Cart ({})", cart.with(|c| c.len()))}</A>
            </nav>
        </header>
        <main>{children()}</main>
        <footer class="site-footer">
            <p>"Handpicked from the states of India."</p>
        </footer>
    }
}

/// Heritage-site card.
#[component]
pub fn HeritageTile(card: HeritageCard) -> impl IntoView {
    let HeritageCard { image, title, description } = card;

    view! {
        <div class="heritage-card">
            <img src=image alt=title.clone()/>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Product tile with a "Buy Now" button: stages the product, then opens the cart.
#[component]
pub fn ProductCard(tile: ProductTile) -> impl IntoView {
    let site = use_site();
    let navigate = use_navigate();
    let ProductTile { image, product, region_name, .. } = tile;
    let name = product.name.clone();
    let description = product.description.clone();
    let price = product.price.clone();

    let on_buy = move |_| {
        site.buy_now(product.clone());
        navigate(&site.config.cart_path, Default::default());
    };

    view! {
        <div class="product-card">
            <img src=image alt=name.clone()/>
            <h3>{name}</h3>
            <p class="origin">{region_name}</p>
            <p>{description}</p>
            <div class="product-footer">
                <span class="price">{price}</span>
                <button class="buy-now" on:click=on_buy>"Buy Now"</button>
            </div>
        </div>
    }
}
