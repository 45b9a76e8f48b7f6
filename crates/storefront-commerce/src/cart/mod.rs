//! Shopping cart module.
//!
//! Contains the line item types, the cart store, its persistence adapter,
//! totals, and the add-to-cart contract.

mod add;
mod item;
mod pricing;
mod repository;
mod store;

pub use add::{parse_quantity, AddToCart};
pub use item::{CartItem, Quantity};
pub use pricing::{cart_total, CartLine, CartSummary};
pub use repository::{CartRepository, SessionCartRepository, CART_KEY};
pub use store::CartStore;
