//! Typed bindings for the catalog endpoints.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use storefront_commerce::catalog::{Banner, Category, Product, ProductDetail};

use crate::request::percent_encode;
use crate::{FetchClient, FetchError};

/// `{ "data": [...] }` wrapper used by listing endpoints.
#[derive(Debug, Deserialize)]
struct DataEnvelope {
    #[serde(default)]
    data: Vec<Product>,
}

/// Read-only client for categories, products and banners.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: FetchClient,
}

impl CatalogClient {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// The underlying fetch client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    /// All categories.
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json("/category").await
    }

    /// The featured product listing shown on the home screen.
    pub async fn featured_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("/admin/product").await
    }

    /// Products in the category identified by `slug`.
    pub async fn products_by_category(&self, slug: &str) -> Result<Vec<Product>, FetchError> {
        let slug = path_segment(slug, "category")?;
        let envelope: DataEnvelope = self.get_json(&format!("/danh-muc/{slug}")).await?;
        Ok(envelope.data)
    }

    /// Products whose name matches `query`.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get("/tim-kiem")
            .query("search", query)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .inspect_err(|e| tracing::error!(error = %e, query, "search failed"))?;
        let envelope: DataEnvelope = response.json()?;
        Ok(envelope.data)
    }

    /// A product and its related products.
    pub async fn product_detail(&self, slug: &str) -> Result<ProductDetail, FetchError> {
        let slug = path_segment(slug, "product")?;
        self.get_json(&format!("/chi-tiet-san-pham/{slug}")).await
    }

    /// Home screen banners.
    pub async fn banners(&self) -> Result<Vec<Banner>, FetchError> {
        self.get_json("/admin/banner").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let result = match self.client.get(path).send().await {
            Ok(response) => response.error_for_status().and_then(|r| r.json()),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::error!(path, error = %e, "catalog request failed");
        }
        result
    }
}

/// Trim and percent-encode a slug so it stays a single path segment.
fn path_segment(slug: &str, what: &str) -> Result<String, FetchError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Err(FetchError::InvalidUrl(format!("{what} slug is empty")));
    }
    Ok(percent_encode(slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::StaticTransport;
    use crate::Method;
    use serde_json::json;
    use std::sync::Arc;
    use storefront_commerce::{Price, ProductId};

    fn catalog(transport: &Arc<StaticTransport>) -> CatalogClient {
        CatalogClient::new(FetchClient::new(transport.clone()).with_base_url("http://api"))
    }

    fn product_json(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "slug": name.to_lowercase(),
            "image": format!("{id}.jpg"),
            "price": 500000,
            "pricesale": 0
        })
    }

    #[tokio::test]
    async fn test_categories() {
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Get,
            "/category",
            json!([{"id": 1, "name": "Consoles", "slug": "consoles", "image": "c.png"}]),
        ));

        let categories = catalog(&transport).categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].slug, "consoles");
    }

    #[tokio::test]
    async fn test_products_by_category_unwraps_data() {
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Get,
            "/danh-muc/consoles",
            json!({"data": [product_json(7, "PS5")]}),
        ));

        let products = catalog(&transport)
            .products_by_category("consoles")
            .await
            .unwrap();
        assert_eq!(products[0].id, ProductId::new(7));
        assert_eq!(products[0].effective_price(), Price::new(500000));
    }

    #[tokio::test]
    async fn test_missing_data_is_empty() {
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Get,
            "/danh-muc/empty",
            json!({}),
        ));

        let products = catalog(&transport).products_by_category("empty").await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_empty_slug_sends_nothing() {
        let transport = Arc::new(StaticTransport::new());
        let client = catalog(&transport);

        assert!(matches!(
            client.products_by_category("  ").await,
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(client.product_detail("").await.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_slugs_stay_one_path_segment() {
        let transport = Arc::new(
            StaticTransport::new()
                .respond_json(Method::Get, "/danh-muc/a%2Fb%3Fx%3D1", json!({"data": []}))
                .respond_json(
                    Method::Get,
                    "/chi-tiet-san-pham/ps5%23top",
                    json!({"product": product_json(1, "PS5"), "listproduct": []}),
                ),
        );
        let client = catalog(&transport);

        assert!(client.products_by_category("a/b?x=1").await.unwrap().is_empty());
        assert_eq!(client.product_detail(" ps5#top ").await.unwrap().product.name, "PS5");
        assert_eq!(transport.request_count("/danh-muc/a%2Fb%3Fx%3D1"), 1);
        assert_eq!(transport.request_count("/chi-tiet-san-pham/ps5%23top"), 1);
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Get,
            "/tim-kiem?search=tay%20cam",
            json!({"data": [product_json(3, "Controller")]}),
        ));

        let results = catalog(&transport).search("tay cam").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(transport.request_count("/tim-kiem?search=tay%20cam"), 1);
    }

    #[tokio::test]
    async fn test_product_detail_with_related() {
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Get,
            "/chi-tiet-san-pham/ps5",
            json!({"product": product_json(1, "PS5"), "listproduct": [product_json(2, "PS4")]}),
        ));

        let detail = catalog(&transport).product_detail("ps5").await.unwrap();
        assert_eq!(detail.product.name, "PS5");
        assert_eq!(detail.related.len(), 1);
    }

    #[tokio::test]
    async fn test_http_error_surfaces() {
        let transport = Arc::new(StaticTransport::new().respond_status(
            Method::Get,
            "/admin/banner",
            500,
            "boom",
        ));

        let err = catalog(&transport).banners().await.unwrap_err();
        assert!(matches!(err, FetchError::HttpError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let transport = Arc::new(StaticTransport::new().respond_status(
            Method::Get,
            "/admin/product",
            200,
            "<html>",
        ));

        let err = catalog(&transport).featured_products().await.unwrap_err();
        assert!(matches!(err, FetchError::ParseError(_)));
    }
}
