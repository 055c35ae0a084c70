//! Cart configuration.

use crate::cart::DEFAULT_TAX_RATE_BPS;
use crate::error::CommerceError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Storage key the browser client has always used for the cart blob.
pub const DEFAULT_STORAGE_KEY: &str = "cart-storage";

/// Settings for a cart store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key the cart blob is stored under.
    pub storage_key: String,
    /// Currency every cart line must be priced in.
    pub currency: Currency,
    /// Tax added to the subtotal, in basis points.
    pub tax_rate_bps: u32,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: Currency::default(),
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

impl CartConfig {
    /// Load config from a TOML file, or JSON when the path ends in `.json`.
    /// Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::Config(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| CommerceError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no store can work with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.storage_key.trim().is_empty() {
            return Err(CommerceError::Config("storage_key must not be empty".to_string()));
        }
        if self.tax_rate_bps > 10_000 {
            return Err(CommerceError::Config(format!(
                "tax_rate_bps {} exceeds 100%",
                self.tax_rate_bps
            )));
        }
        Ok(())
    }
}
