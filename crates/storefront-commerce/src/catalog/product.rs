//! Product records.

use crate::ids::{CategoryId, ProductId};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Only the fields the client reads are modelled; anything else the API
/// sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug used by the detail endpoint.
    #[serde(default)]
    pub slug: String,
    /// Relative image filename.
    #[serde(default)]
    pub image: String,
    /// List price.
    pub price: Price,
    /// Discounted price, when the product is on sale.
    #[serde(default)]
    pub pricesale: Option<Price>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Long-form details.
    #[serde(default)]
    pub detail: Option<String>,
    /// Owning category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl Product {
    /// Create a product at list price.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            image: String::new(),
            price,
            pricesale: None,
            description: None,
            detail: None,
            category_id: None,
        }
    }

    /// Set the discounted price.
    pub fn with_sale_price(mut self, pricesale: Price) -> Self {
        self.pricesale = Some(pricesale);
        self
    }

    /// Set the image filename.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Price a shopper pays for one unit.
    ///
    /// The discounted price wins when present and greater than zero; a zero or
    /// missing discount falls back to the list price.
    pub fn effective_price(&self) -> Price {
        match self.pricesale {
            Some(sale) if sale.is_positive() => sale,
            _ => self.price,
        }
    }

    /// Check if a discount currently applies.
    pub fn is_on_sale(&self) -> bool {
        self.pricesale.is_some_and(Price::is_positive)
    }
}

/// Product detail payload: the product plus related products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    #[serde(rename = "listproduct", default)]
    pub related: Vec<Product>,
}
