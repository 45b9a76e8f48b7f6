//! Image URL resolution.
//!
//! The API returns bare filenames; the images themselves are served from a
//! fixed folder per record kind under the asset host.

use serde::{Deserialize, Serialize};

/// Asset host used when none is configured.
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:8000";

/// The kind of record an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Product,
    Category,
    Banner,
}

impl ImageKind {
    /// Folder under `imgs/` holding this kind of image.
    pub fn folder(&self) -> &'static str {
        match self {
            ImageKind::Product => "products",
            // The server spells this folder "categorys".
            ImageKind::Category => "categorys",
            ImageKind::Banner => "banners",
        }
    }
}

/// Resolves relative image filenames against the asset host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUrls {
    base_url: String,
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE_URL)
    }
}

impl AssetUrls {
    /// Create a resolver for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The asset host without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL of an image.
    ///
    /// Filenames that are already absolute URLs are returned unchanged.
    ///
    /// ```
    /// use storefront_commerce::catalog::{AssetUrls, ImageKind};
    ///
    /// let assets = AssetUrls::default();
    /// assert_eq!(
    ///     assets.image_url(ImageKind::Product, "ps5.png"),
    ///     "http://localhost:8000/imgs/products/ps5.png"
    /// );
    /// ```
    pub fn image_url(&self, kind: ImageKind, file: &str) -> String {
        if file.starts_with("http://") || file.starts_with("https://") {
            return file.to_string();
        }
        format!(
            "{}/imgs/{}/{}",
            self.base_url,
            kind.folder(),
            file.trim_start_matches('/')
        )
    }
}
