//! Cart line type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One aggregated entry for a product in the cart.
///
/// Title, price and display metadata are a snapshot taken when the product
/// was first added; the cart never re-fetches them. The price is a bare
/// count of minor units in the owning store's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    product_id: ProductId,
    title: String,
    /// Discount-adjusted price of one unit, in minor units.
    unit_price: i64,
    quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_label: Option<String>,
}

impl CartLine {
    /// Create a candidate line. `quantity` must be at least 1.
    pub fn new(
        product_id: ProductId,
        title: impl Into<String>,
        unit_price: i64,
        quantity: u32,
    ) -> Result<Self, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        Ok(Self {
            product_id,
            title: title.into(),
            unit_price,
            quantity,
            image_url: None,
            platform_label: None,
        })
    }

    /// Attach an image URL.
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Attach a platform label (e.g. "Steam", "PSN").
    pub fn with_platform(mut self, platform_label: impl Into<String>) -> Self {
        self.platform_label = Some(platform_label.into());
        self
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn unit_price(&self) -> i64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn platform_label(&self) -> Option<&str> {
        self.platform_label.as_deref()
    }

    /// `unit_price × quantity` in minor units, saturating.
    pub fn line_total(&self) -> i64 {
        self.unit_price.saturating_mul(i64::from(self.quantity))
    }

    pub(crate) fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity > 0);
        self.quantity = quantity;
    }
}
