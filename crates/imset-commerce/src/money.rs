//! Money type for representing monetary values.
//!
//! Uses an integer count of the currency's minor unit to avoid
//! floating-point drift when summing cart lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Tunisian dinar, the storefront's settlement currency.
    #[default]
    TND,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "TND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::TND => "TND",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Number of minor-unit digits (millimes for TND, cents otherwise).
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::TND => 3,
            Currency::USD | Currency::EUR => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the currency's smallest unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, as the catalog API
    /// sends prices.
    ///
    /// ```
    /// use imset_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_minor, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_minor = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Add an amount of the same currency, clamping at the numeric bounds.
    pub(crate) fn saturating_add_minor(&self, amount_minor: i64) -> Money {
        Money::new(self.amount_minor.saturating_add(amount_minor), self.currency)
    }

    /// Multiply by a decimal factor (e.g., `0.8` for a 20% discount).
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_minor as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Take a rate expressed in basis points (`1000` = 10%), rounding half
    /// away from zero to the minor unit.
    pub fn basis_points(&self, bps: u32) -> Money {
        let scaled = i128::from(self.amount_minor) * i128::from(bps);
        let half = if scaled < 0 { -5_000 } else { 5_000 };
        let amount = (scaled + half) / 10_000;
        Money::new(
            i64::try_from(amount).unwrap_or(if amount < 0 { i64::MIN } else { i64::MAX }),
            self.currency,
        )
    }

    /// Format as a display string (e.g., "59.990 TND").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), self.currency.code())
    }

    /// Format as a display string without the code (e.g., "59.990").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_minor.unsigned_abs();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        if places == 0 {
            return format!("{sign}{abs}");
        }
        format!(
            "{sign}{}.{:0places$}",
            abs / per_major,
            abs % per_major,
            places = places
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(59.99, Currency::TND);
        assert_eq!(m.amount_minor, 59_990);

        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(59_990, Currency::TND).display(), "59.990 TND");
        assert_eq!(Money::new(4999, Currency::USD).display(), "49.99 USD");
        assert_eq!(Money::new(-5, Currency::EUR).display(), "-0.05 EUR");
        assert_eq!(Money::zero(Currency::TND).to_string(), "0.000 TND");
    }

    #[test]
    fn test_basis_points_rounding() {
        // 10% of 12.345 TND is 1.2345 -> 1.235 (half away from zero)
        let m = Money::new(12_345, Currency::TND);
        assert_eq!(m.basis_points(1000).amount_minor, 1235);
        assert_eq!(Money::new(-12_345, Currency::TND).basis_points(1000).amount_minor, -1235);
        assert_eq!(m.basis_points(0).amount_minor, 0);
    }
}
