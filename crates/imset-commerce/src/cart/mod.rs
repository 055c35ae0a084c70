//! Shopping cart module.
//!
//! Contains the cart line and state types, the persistence port, the store
//! that views share, and the derived order summary.

mod line;
mod persistence;
mod state;
mod store;
mod summary;

pub use line::CartLine;
pub use persistence::{CartPersistence, KvCartPersistence};
pub use state::CartState;
pub use store::{CartStore, SharedCart};
pub use summary::{OrderSummary, DEFAULT_TAX_RATE_BPS};
