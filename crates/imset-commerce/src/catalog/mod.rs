//! Product catalog module.
//!
//! Read-only views of catalog products, used to build cart lines.

mod snapshot;

pub use snapshot::{ProductSnapshot, ProductType};
