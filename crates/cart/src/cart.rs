use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sanskriti_catalog::Product;
use sanskriti_core::CartLineId;

/// One staged product. Repeated purchases of the same product are separate items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub line_id: CartLineId,
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self::with_line(CartLineId::new(), product, Utc::now())
    }

    pub fn with_line(line_id: CartLineId, product: Product, added_at: DateTime<Utc>) -> Self {
        Self {
            line_id,
            product,
            added_at,
        }
    }
}

/// Append-only list of staged products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a snapshot of `product`. Never merges with earlier entries.
    pub fn add_product(&mut self, product: Product) -> &CartItem {
        self.push(CartItem::new(product))
    }

    /// Append a prepared item (explicit line id and timestamp).
    pub fn push(&mut self, item: CartItem) -> &CartItem {
        tracing::info!(
            product_id = %item.product.id,
            line_id = %item.line_id,
            items = self.items.len() + 1,
            "product added to cart"
        );
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.items.iter().map(|item| &item.product)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scarf() -> Product {
        Product::new("p1", "Scarf", "$10")
    }

    #[test]
    fn add_product_to_empty_cart() {
        let mut cart = CartStore::new();
        assert!(cart.is_empty());

        cart.add_product(scarf());

        let products: Vec<Product> = cart.products().cloned().collect();
        assert_eq!(products, vec![scarf()]);
        assert_eq!(cart.items()[0].product.price, "$10");
    }

    #[test]
    fn repeated_adds_append_duplicates() {
        let mut cart = CartStore::new();
        let first = cart.add_product(scarf()).line_id;
        let second = cart.add_product(scarf()).line_id;

        assert_eq!(cart.len(), 2);
        assert_ne!(first, second);
        assert!(cart.products().all(|p| p == &scarf()));
    }

    #[test]
    fn push_keeps_explicit_line_metadata() {
        let mut cart = CartStore::new();
        let line_id = CartLineId::new();
        let at = Utc::now();

        let item = cart.push(CartItem::with_line(line_id, scarf(), at));
        assert_eq!(item.line_id, line_id);
        assert_eq!(item.added_at, at);
    }

    #[test]
    fn stored_snapshot_is_independent_of_caller_copy() {
        let mut cart = CartStore::new();
        let mut product = scarf();
        cart.add_product(product.clone());
        product.price = "$99".to_string();

        assert_eq!(cart.items()[0].product.price, "$10");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: N additions always yield N entries, in call order.
            #[test]
            fn cart_is_append_only(
                picks in proptest::collection::vec(0usize..3, 0..50)
            ) {
                let catalog = [
                    Product::new("p1", "Scarf", "$10"),
                    Product::new("p2", "Bangles", "$25"),
                    Product::new("p3", "Shawl", "$40"),
                ];
                let mut cart = CartStore::new();
                for &i in &picks {
                    cart.add_product(catalog[i].clone());
                }

                prop_assert_eq!(cart.len(), picks.len());
                for (item, &i) in cart.items().iter().zip(&picks) {
                    prop_assert_eq!(&item.product, &catalog[i]);
                }
            }
        }
    }
}
