//! Cart domain module.
//!
//! Session-lifetime list of products staged through "Buy Now". The store is an
//! explicit value owned by the caller (the web shell keeps it in a reactive
//! signal), so tests can build isolated instances.

pub mod cart;

pub use cart::{CartItem, CartStore};
