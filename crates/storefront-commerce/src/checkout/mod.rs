//! Checkout module.
//!
//! Placing an order snapshots the cart and empties it. Nothing is sent to a
//! server; payment is out of scope.

mod order;

pub use order::{place_order, OrderSummary};
