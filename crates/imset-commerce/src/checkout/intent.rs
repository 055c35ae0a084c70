//! Payment-intent request body.

use crate::cart::{CartPersistence, CartStore};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product and how many units to charge for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body of the create-payment-intent call.
///
/// Only ids and quantities leave the client; the backend re-prices every
/// item, so cart prices are never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    pub items: Vec<IntentItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl PaymentIntentRequest {
    /// Build the request from the cart's lines, in cart order.
    ///
    /// A blank promo code is dropped.
    pub fn from_cart<P: CartPersistence>(
        cart: &CartStore<P>,
        promo_code: Option<&str>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let items = cart
            .lines()
            .iter()
            .map(|line| IntentItem {
                product_id: line.product_id().clone(),
                quantity: line.quantity(),
            })
            .collect();
        let promo_code = promo_code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string);
        Ok(Self { items, promo_code })
    }
}
