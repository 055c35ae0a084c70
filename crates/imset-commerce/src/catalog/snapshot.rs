//! Catalog products as the storefront API returns them.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// Game activation key.
    #[serde(rename = "GAME")]
    Game,
    /// Store gift card code.
    #[serde(rename = "GIFTCARD")]
    GiftCard,
}

/// The parts of a catalog product a view needs to put it in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub title: String,
    /// List price in major units.
    pub price: f64,
    /// Discount percentage, `0.0..=100.0`.
    pub discount: f64,
    pub images: Vec<String>,
    pub platform: Option<String>,
    pub product_type: Option<ProductType>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiProduct {
    title: String,
    price: f64,
    #[serde(default)]
    discount: f64,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    product_type: Option<ProductType>,
}

impl ProductSnapshot {
    /// Parse one product object from the catalog API, normalizing its id.
    pub fn from_api(product: &Value) -> Result<Self, CommerceError> {
        let id = ProductId::from_api_value(product)?;
        let api = ApiProduct::deserialize(product)?;
        Ok(Self {
            id,
            title: api.title,
            price: api.price,
            discount: api.discount,
            images: api.images,
            platform: api.platform.filter(|p| !p.trim().is_empty()),
            product_type: api.product_type,
        })
    }

    /// Unit price after the percentage discount.
    pub fn discounted_price(&self, currency: Currency) -> Money {
        let discount = self.discount.clamp(0.0, 100.0);
        Money::from_decimal(self.price, currency).multiply_decimal(1.0 - discount / 100.0)
    }

    /// Build the candidate cart line for `quantity` units.
    pub fn to_cart_line(&self, quantity: u32, currency: Currency) -> Result<CartLine, CommerceError> {
        let mut line = CartLine::new(
            self.id.clone(),
            self.title.clone(),
            self.discounted_price(currency).amount_minor,
            quantity,
        )?;
        if let Some(image) = self.images.first() {
            line = line.with_image(image.clone());
        }
        if let Some(platform) = &self.platform {
            line = line.with_platform(platform.clone());
        }
        Ok(line)
    }
}
