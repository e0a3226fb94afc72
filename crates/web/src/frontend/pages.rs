//! Route components. Each one builds its page model and renders it.

use leptos::*;
use leptos_router::*;

use sanskriti_catalog::ProductCategory;

use crate::frontend::app::use_site;
use crate::frontend::components::{HeritageTile, ProductCard};
use crate::page::{self, CategoryPage, StatePage, StateView};

/// Home page: hero section plus the carousel of states.
#[component]
pub fn Home() -> impl IntoView {
    let site = use_site();
    let tiles = page::region_tiles(&site.catalog, &site.images);

    view! {
        <section class="hero">
            <h1>"Sanskriti"</h1>
            <p>"Crafts, textiles and heritage from across India."</p>
            <A href="/jewelry" class="hero-cta">"Shop jewelry"</A>
        </section>
        <section class="states-carousel">
            <h2>"Explore the States"</h2>
            <div class="carousel">
                {tiles
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <A href=tile.href class="state-tile">
                                <img src=tile.image alt=tile.name.clone()/>
                                <span>{tile.name}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Jewelry() -> impl IntoView {
    view! { <CategoryListing category=ProductCategory::Jewelry/> }
}

#[component]
pub fn Apparels() -> impl IntoView {
    view! { <CategoryListing category=ProductCategory::Apparel/> }
}

#[component]
fn CategoryListing(category: ProductCategory) -> impl IntoView {
    let site = use_site();
    let CategoryPage { title, tiles } =
        CategoryPage::assemble(&site.catalog, category, &site.images);

    view! {
        <div class="category-page">
            <h1>{title}</h1>
            {if tiles.is_empty() {
                view! { <p>"Nothing in this collection yet."</p> }.into_view()
            } else {
                view! {
                    <div class="product-grid">
                        {tiles
                            .into_iter()
                            .map(|tile| view! { <ProductCard tile=tile/> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

/// `/states/:stateId`.
#[component]
pub fn StateDetails() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();
    let state_id = move || params.with(|p| p.get("stateId").cloned().unwrap_or_default());

    move || {
        let id = state_id();
        let page = site.cards.with(|cards| {
            StatePage::assemble(site.catalog.resolve(&id), cards.cards_for(&id), &site.images)
        });

        match page {
            StatePage::NotFound { message } => {
                view! { <div class="not-found">{message}</div> }.into_view()
            }
            StatePage::Found(state) => view! { <StateSections state=state/> }.into_view(),
        }
    }
}

#[component]
fn StateSections(state: StateView) -> impl IntoView {
    let site = use_site();
    let navigate = use_navigate();
    let maps_path = site.config.maps_path.clone();
    let shop_url = site.config.shop_url.clone();
    let StateView { name, hero_image, description, facts, heritage, products, .. } = state;

    view! {
        <div class="state-page">
            <div class="state-hero">
                <img src=hero_image alt=name.clone()/>
                <h1>{name}</h1>
            </div>
            <div class="state-body">
                <p class="description">{description}</p>
                {facts
                    .into_iter()
                    .map(|fact| {
                        view! {
                            <div class="fact">
                                <strong>{fact.label}":"</strong>" "{fact.value}
                            </div>
                        }
                    })
                    .collect_view()}

                <h2>"Heritage Sites"</h2>
                <div class="card-grid">
                    {heritage
                        .into_iter()
                        .map(|card| view! { <HeritageTile card=card/> })
                        .collect_view()}
                </div>

                <h2>"Products"</h2>
                <div class="product-grid">
                    {products
                        .into_iter()
                        .map(|tile| view! { <ProductCard tile=tile/> })
                        .collect_view()}
                </div>

                <h2>"Explore"</h2>
                <div class="explore">
                    <button class="maps" on:click=move |_| navigate(&maps_path, Default::default())>
                        "Go to Maps"
                    </button>
                    <button class="shop" on:click=move |_| open_external(&shop_url)>
                        "Shop"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Full page navigation away from the app.
fn open_external(url: &str) {
    if let Err(err) = window().location().set_href(url) {
        tracing::warn!(url, error = ?err, "failed to open external page");
    }
}

/// `/cart`: the staged products, duplicates included.
#[component]
pub fn Cart() -> impl IntoView {
    let site = use_site();
    let images = site.images.clone();
    let cart = site.cart;
    let lines = move || cart.with(|cart| page::cart_lines(cart, &images));

    view! {
        <div class="cart-page">
            <h1>"Your Cart"</h1>
            {move || {
                let lines = lines();
                if lines.is_empty() {
                    view! { <p>"Your cart is empty."</p> }.into_view()
                } else {
                    view! {
                        <ul class="cart-lines">
                            {lines
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <li>
                                            <img src=line.image alt=line.name.clone()/>
                                            <span class="name">{line.name}</span>
                                            <span class="price">{line.price}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn Maps() -> impl IntoView {
    view! {
        <div class="maps-page">
            <h1>"Maps"</h1>
            <p>"An interactive map of the states is on its way."</p>
            <A href="/">"Back to states"</A>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Page not found"</p>
            <A href="/">"Go home"</A>
        </div>
    }
}
