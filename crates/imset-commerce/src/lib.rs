//! Client-side cart core for the imset digital-goods storefront.
//!
//! This crate provides the pieces storefront views share:
//!
//! - **Cart**: the cart store with quantity merging, derived totals and
//!   persistence on every mutation
//! - **Catalog**: product snapshots from the catalog API, with id
//!   normalization and discount-adjusted prices
//! - **Checkout**: the payment-intent request built from the cart
//! - **Config**: storage key, currency and tax rate
//!
//! # Example
//!
//! ```
//! use imset_cache::MemoryBackend;
//! use imset_commerce::prelude::*;
//!
//! let mut cart = CartStore::from_config(MemoryBackend::new(), &CartConfig::default());
//! // Prices are minor units of the store's currency (TND by default).
//! let line = CartLine::new(ProductId::new("p1"), "Elden Ring", 10_000, 2).unwrap();
//! cart.add(line);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().display(), "20.000 TND");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        CartLine, CartPersistence, CartState, CartStore, KvCartPersistence, OrderSummary,
        SharedCart,
    };

    // Catalog
    pub use crate::catalog::{ProductSnapshot, ProductType};

    // Checkout
    pub use crate::checkout::{IntentItem, PaymentIntentRequest};

    pub use crate::config::CartConfig;
}
