//! Catalog module.
//!
//! Records returned by the catalog API: products, categories and banners,
//! plus image URL resolution.

mod banner;
mod category;
mod media;
mod product;

pub use banner::Banner;
pub use category::Category;
pub use media::{AssetUrls, ImageKind, DEFAULT_ASSET_BASE_URL};
pub use product::{Product, ProductDetail};
