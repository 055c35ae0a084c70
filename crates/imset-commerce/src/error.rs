//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront cart operations.
///
/// Cart mutations themselves never fail; these errors come from building
/// candidate lines, restoring state, loading configuration, and preparing
/// checkout payloads.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Product id missing, blank, or a catalog placeholder.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// Two cart lines share a product id.
    #[error("Duplicate cart line for product {0}")]
    DuplicateLine(String),

    /// Checkout requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Configuration could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
