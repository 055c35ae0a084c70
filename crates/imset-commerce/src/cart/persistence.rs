//! Cart persistence port and its Key-Value adapter.

use crate::cart::CartState;
use crate::config::CartConfig;
use imset_cache::{Cache, KeyValueBackend};

/// Where the cart survives reloads.
///
/// Both calls are fail-soft: `load` returns `None` for anything it cannot
/// use and `save` swallows write failures after logging them.
pub trait CartPersistence {
    /// Restore the last saved state, if a valid one exists.
    fn load(&self) -> Option<CartState>;

    /// Replace the saved state.
    fn save(&self, state: &CartState);
}

/// Stores the cart as one JSON blob under a fixed key.
#[derive(Debug, Clone)]
pub struct KvCartPersistence<B> {
    cache: Cache<B>,
    key: String,
}

impl<B: KeyValueBackend> KvCartPersistence<B> {
    /// Persist under `key`.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(backend),
            key: key.into(),
        }
    }

    /// Persist under the configured storage key.
    pub fn from_config(backend: B, config: &CartConfig) -> Self {
        Self::new(backend, config.storage_key.clone())
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        self.cache.backend()
    }
}

impl<B: KeyValueBackend> CartPersistence for KvCartPersistence<B> {
    fn load(&self) -> Option<CartState> {
        let state = match self.cache.get::<CartState>(&self.key) {
            Ok(Some(state)) => state,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable cart blob");
                return None;
            }
        };
        if let Err(e) = state.validate() {
            tracing::warn!(key = %self.key, error = %e, "discarding invalid cart blob");
            return None;
        }
        tracing::debug!(key = %self.key, lines = state.len(), "cart restored");
        Some(state)
    }

    fn save(&self, state: &CartState) {
        match self.cache.set(&self.key, state) {
            Ok(()) => tracing::debug!(key = %self.key, lines = state.len(), "cart saved"),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "failed to save cart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::ids::ProductId;
    use crate::money::Currency;
    use imset_cache::MemoryBackend;

    fn persistence() -> KvCartPersistence<MemoryBackend> {
        KvCartPersistence::new(MemoryBackend::new(), "cart-storage")
    }

    #[test]
    fn test_missing_blob_loads_nothing() {
        assert_eq!(persistence().load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let p = persistence();
        let line = CartLine::new(ProductId::new("p1"), "FIFA", 90_000, 2)
            .unwrap()
            .with_platform("PSN");
        let state = CartState::from_lines(vec![line]).unwrap();

        p.save(&state);
        assert_eq!(p.load(), Some(state));
    }

    #[test]
    fn test_corrupt_blob_loads_nothing() {
        let p = persistence();
        p.backend().set_raw("cart-storage", "{\"items\": [").unwrap();
        assert_eq!(p.load(), None);

        p.backend().set_raw("cart-storage", "{}").unwrap();
        assert_eq!(p.load(), None);
    }

    #[test]
    fn test_duplicate_lines_load_nothing() {
        let p = persistence();
        let line = r#"{"productId":"p1","title":"x","unitPrice":1,"quantity":1}"#;
        let blob = format!("{{\"items\":[{line},{line}]}}");
        p.backend().set_raw("cart-storage", &blob).unwrap();
        assert_eq!(p.load(), None);
    }

    #[test]
    fn test_hand_written_numeric_blob_loads() {
        let p = persistence();
        let blob = r#"{"items":[{"productId":"p1","title":"x","unitPrice":10,"quantity":2}]}"#;
        p.backend().set_raw("cart-storage", blob).unwrap();

        let state = p.load().unwrap();
        assert_eq!(state.item_count(), 2);
        assert_eq!(state.items()[0].unit_price(), 10);
        assert_eq!(state.total(Currency::TND).amount_minor, 20);
    }
}
