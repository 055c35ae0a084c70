//! Type-safe client-side Key-Value storage for the imset storefront.
//!
//! Values are stored as JSON text behind a small backend trait, so the same
//! code runs against browser `localStorage`, a directory on disk, or memory.
//!
//! # Example
//!
//! ```
//! use imset_cache::{Cache, MemoryBackend};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Blob {
//!     items: Vec<String>,
//! }
//!
//! let cache = Cache::new(MemoryBackend::new());
//! cache.set("cart-storage", &Blob { items: vec![] }).unwrap();
//! let blob: Option<Blob> = cache.get("cart-storage").unwrap();
//! assert!(blob.is_some());
//! ```

mod backend;
mod error;
mod file;
mod kv;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use backend::{KeyValueBackend, MemoryBackend};
pub use error::CacheError;
pub use file::FileBackend;
pub use kv::Cache;

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorageBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileBackend, KeyValueBackend, MemoryBackend};
}
