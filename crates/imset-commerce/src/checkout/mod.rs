//! Checkout module.
//!
//! Builds the request the payment collaborator needs from the cart.

mod intent;

pub use intent::{IntentItem, PaymentIntentRequest};
