//! HTTP client and catalog API bindings for the storefront client.
//!
//! Provides a small builder API for outbound requests with automatic JSON
//! handling, a pluggable [`Transport`], and typed clients for the catalog and
//! account endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{CatalogClient, FetchClient};
//!
//! let client = FetchClient::http().with_base_url("http://localhost:8000");
//! let catalog = CatalogClient::new(client);
//!
//! let categories = catalog.categories().await?;
//! let detail = catalog.product_detail("ps5-slim").await?;
//! println!("{} related products", detail.related.len());
//! ```

mod account;
mod catalog;
mod error;
pub mod mock;
mod request;
mod response;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;

pub use account::{AccountClient, Credentials, Gender, Registration};
pub use catalog::CatalogClient;
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, Transport};

/// HTTP client for making outbound requests.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client sending through `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client using the network transport.
    pub fn http() -> Self {
        Self::new(Arc::new(HttpTransport::new()))
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: self.transport.clone(),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let method = self.builder.method();
        let url = self.builder.url().to_string();
        tracing::debug!(method = method.as_str(), %url, "sending request");

        let result = self.transport.send(self.builder).await;
        match &result {
            Ok(response) => {
                tracing::debug!(method = method.as_str(), %url, status = response.status, "response")
            }
            Err(e) => tracing::debug!(method = method.as_str(), %url, error = %e, "request failed"),
        }
        result
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AccountClient, CatalogClient, FetchClient, FetchError, Method, Response, Transport,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::StaticTransport;

    #[tokio::test]
    async fn test_base_url_prepended() {
        let transport = Arc::new(StaticTransport::new());
        let client = FetchClient::new(transport.clone()).with_base_url("http://localhost:8000/");

        client.get("/category").send().await.unwrap();
        client.get("https://elsewhere/x").send().await.unwrap();

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/category", "/x"]);
        assert_eq!(client.base_url(), Some("http://localhost:8000/"));
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let transport = Arc::new(StaticTransport::new().fail(
            Method::Get,
            "/category",
            FetchError::RequestError("connection refused".into()),
        ));
        let client = FetchClient::new(transport).with_base_url("http://h");

        let err = client.get("/category").send().await.unwrap_err();
        assert!(matches!(err, FetchError::RequestError(_)));
    }
}
