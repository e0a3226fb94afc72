//! Leptos application with routing and shared client state.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use sanskriti_cart::CartStore;
use sanskriti_catalog::{CardStore, CatalogStore, Product};

use crate::config::SiteConfig;
use crate::data::SiteData;
use crate::frontend::components::Layout;
use crate::frontend::pages::{Apparels, Cart, Home, Jewelry, Maps, NotFound, StateDetails};
use crate::images::ImageResolver;

/// Client state shared through context.
///
/// The catalog is immutable; card and cart stores live in signals so pages
/// re-render when they change. The cart lasts until a full reload.
#[derive(Clone)]
pub struct Site {
    pub catalog: Rc<CatalogStore>,
    pub cards: RwSignal<CardStore>,
    pub cart: RwSignal<CartStore>,
    pub config: Rc<SiteConfig>,
    pub images: Rc<ImageResolver>,
}

impl Site {
    pub fn new(data: SiteData, config: SiteConfig) -> Self {
        let SiteData { catalog, cards } = data;
        Self {
            catalog: Rc::new(catalog),
            cards: create_rw_signal(cards),
            cart: create_rw_signal(CartStore::new()),
            images: Rc::new(ImageResolver::new(config.asset_base.clone())),
            config: Rc::new(config),
        }
    }

    /// Stage a product; the caller navigates to the cart afterwards.
    pub fn buy_now(&self, product: Product) {
        self.cart.update(|cart| {
            cart.add_product(product);
        });
    }
}

pub fn use_site() -> Site {
    expect_context::<Site>()
}

/// Main application component.
#[component]
pub fn App(data: SiteData, config: SiteConfig) -> impl IntoView {
    provide_context(Site::new(data, config));

    view! {
        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=Home/>
                    <Route path="/jewelry" view=Jewelry/>
                    <Route path="/apparels" view=Apparels/>
                    <Route path="/states/:stateId" view=StateDetails/>
                    <Route path="/cart" view=Cart/>
                    <Route path="/maps" view=Maps/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Layout>
        </Router>
    }
}
