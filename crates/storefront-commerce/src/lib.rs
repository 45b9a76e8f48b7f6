//! Storefront domain types and the client-side cart engine.
//!
//! This crate provides:
//!
//! - **Catalog**: Products, categories, banners, image URL resolution
//! - **Cart**: Line items, the write-through cart store, persistence, totals
//! - **Checkout**: Local order placement
//!
//! # Example
//!
//! ```rust
//! use storefront_cache::MemoryStore;
//! use storefront_commerce::prelude::*;
//!
//! let product = Product::new(1, "DualSense", "dualsense", Price::new(1_500_000))
//!     .with_sale_price(Price::new(1_200_000));
//!
//! let mut cart = CartStore::load(SessionCartRepository::new(MemoryStore::new()));
//! AddToCart::new(&product, parse_quantity("2")?).apply(&mut cart)?;
//!
//! assert_eq!(cart.total()?, Price::new(2_400_000));
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{AssetUrls, Banner, Category, ImageKind, Product, ProductDetail};

    // Cart
    pub use crate::cart::{
        cart_total, parse_quantity, AddToCart, CartItem, CartLine, CartRepository, CartStore,
        CartSummary, Quantity, SessionCartRepository,
    };

    // Checkout
    pub use crate::checkout::{place_order, OrderSummary};
}
