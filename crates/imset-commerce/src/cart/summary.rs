//! Order summary shown on the cart and checkout pages.

use crate::cart::{CartPersistence, CartStore};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat tax the storefront adds on top of the cart subtotal (10%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 1_000;

/// Subtotal, tax and total for the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub item_count: u64,
}

impl OrderSummary {
    /// Summarize a cart with a tax rate in basis points.
    pub fn for_cart<P: CartPersistence>(cart: &CartStore<P>, tax_rate_bps: u32) -> Self {
        let subtotal = cart.total();
        let tax = subtotal.basis_points(tax_rate_bps);
        Self {
            subtotal,
            tax,
            total: subtotal.saturating_add_minor(tax.amount_minor),
            item_count: cart.item_count(),
        }
    }
}
