//! Product identifiers.
//!
//! The catalog API is inconsistent about where and how it puts a product's
//! id, so everything entering the cart goes through [`ProductId`].

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Prefix the catalog uses for placeholder products that are not purchasable.
const PLACEHOLDER_PREFIX: &str = "temp_";

/// Opaque product identifier, unique within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from a string without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create an ID, rejecting blank and placeholder values.
    pub fn parse(id: &str) -> Result<Self, CommerceError> {
        let trimmed = id.trim();
        if trimmed.is_empty() || trimmed.starts_with(PLACEHOLDER_PREFIX) {
            return Err(CommerceError::InvalidProductId(id.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Extract the id from a product object returned by the catalog API.
    ///
    /// `_id` wins over `id`. Either may be a string, a number, or a
    /// `{"$oid": "..."}` document; empty values fall through to the next
    /// candidate.
    ///
    /// ```
    /// use imset_commerce::ProductId;
    /// use serde_json::json;
    ///
    /// let id = ProductId::from_api_value(&json!({"id": 42, "title": "Game"})).unwrap();
    /// assert_eq!(id.as_str(), "42");
    /// ```
    pub fn from_api_value(product: &Value) -> Result<Self, CommerceError> {
        let raw = ["_id", "id"]
            .iter()
            .filter_map(|field| product.get(*field))
            .find_map(raw_id)
            .ok_or_else(|| CommerceError::InvalidProductId("missing".to_string()))?;
        Self::parse(&raw)
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn raw_id(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(doc) => doc.get("$oid")?.as_str()?.trim().to_string(),
        _ => return None,
    };
    (!raw.is_empty()).then_some(raw)
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
        assert_eq!(format!("{}", id), "prod-456");
    }

    #[test]
    fn test_parse_trims_and_rejects_placeholders() {
        assert_eq!(ProductId::parse("  abc ").unwrap().as_str(), "abc");
        assert!(ProductId::parse("   ").is_err());
        assert!(ProductId::parse("temp_featured_3").is_err());
    }

    #[test]
    fn test_underscore_id_wins() {
        let product = json!({"_id": "mongo-1", "id": 7});
        assert_eq!(ProductId::from_api_value(&product).unwrap().as_str(), "mongo-1");
    }

    #[test]
    fn test_falls_back_to_id() {
        let product = json!({"_id": null, "id": 7});
        assert_eq!(ProductId::from_api_value(&product).unwrap().as_str(), "7");

        let product = json!({"_id": "", "id": "sql-9"});
        assert_eq!(ProductId::from_api_value(&product).unwrap().as_str(), "sql-9");
    }

    #[test]
    fn test_object_id_document() {
        let product = json!({"_id": {"$oid": "65f1c0ffee"}});
        assert_eq!(ProductId::from_api_value(&product).unwrap().as_str(), "65f1c0ffee");
    }

    #[test]
    fn test_missing_id() {
        let err = ProductId::from_api_value(&json!({"title": "x"})).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidProductId(_)));

        let err = ProductId::from_api_value(&json!({"_id": "temp_12"})).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidProductId(_)));
    }
}
