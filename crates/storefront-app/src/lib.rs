//! Screen state and navigation for the storefront client.
//!
//! Screens are plain state holders driven by async actions. They talk to the
//! catalog through [`storefront_data`] and keep the cart through a shared
//! [`CartRepository`](storefront_commerce::cart::CartRepository).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_app::prelude::*;
//!
//! let history = Arc::new(RouteHistory::default());
//! let storefront = Storefront::new(client, cart_repository, history.clone());
//!
//! let detail = storefront.product_detail("ps5-slim");
//! detail.mount().await?;
//! detail.set_quantity("2");
//! detail.add_to_cart()?;
//! ```

pub mod alert;
pub mod app;
pub mod error;
pub mod lifecycle;
pub mod navigation;
pub mod screens;

pub use alert::Alert;
pub use app::{SharedCartRepository, Storefront, DEFAULT_SLIDE_INTERVAL};
pub use error::AppError;
pub use lifecycle::{Lifecycle, MountToken};
pub use navigation::{Navigator, Route, RouteHistory};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::alert::Alert;
    pub use crate::app::{SharedCartRepository, Storefront};
    pub use crate::error::AppError;
    pub use crate::lifecycle::{Lifecycle, MountToken};
    pub use crate::navigation::{Navigator, Route, RouteHistory};
    pub use crate::screens::*;
}
