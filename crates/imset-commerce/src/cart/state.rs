//! The cart aggregate and its invariants.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered cart lines. Serializes as `{"items": [...]}`.
///
/// Invariants: every line has `quantity >= 1` and no two lines share a
/// product id. Totals are always derived from the lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartLine>,
}

impl CartState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from lines, checking the invariants.
    pub fn from_lines(items: Vec<CartLine>) -> Result<Self, CommerceError> {
        let state = Self { items };
        state.validate()?;
        Ok(state)
    }

    /// Check the invariants. Deserialized state must pass this before use.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for line in &self.items {
            if line.quantity() == 0 {
                return Err(CommerceError::InvalidQuantity(0));
            }
            if !seen.insert(line.product_id()) {
                return Err(CommerceError::DuplicateLine(line.product_id().to_string()));
            }
        }
        Ok(())
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| l.product_id() == product_id)
    }

    /// `Σ unit_price × quantity`, in `currency`.
    pub fn total(&self, currency: Currency) -> Money {
        self.items.iter().fold(Money::zero(currency), |acc, line| {
            acc.saturating_add_minor(line.line_total())
        })
    }

    /// `Σ quantity`.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity())).sum()
    }

    pub(crate) fn get_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.items.iter_mut().find(|l| l.product_id() == product_id)
    }

    pub(crate) fn push(&mut self, line: CartLine) {
        self.items.push(line);
    }

    /// Remove the line for a product; returns whether one was removed.
    pub(crate) fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|l| l.product_id() != product_id);
        self.items.len() < len_before
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}
