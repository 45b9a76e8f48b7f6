//! Home screen: category strip, product listing and search.

use std::sync::Arc;

use parking_lot::RwLock;
use storefront_commerce::catalog::{Category, Product};
use storefront_data::CatalogClient;

use crate::error::AppError;
use crate::lifecycle::Lifecycle;
use crate::navigation::{Navigator, Route};

/// What the home screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    /// Category menu.
    pub categories: Vec<Category>,
    /// Featured products, or the selected category's products.
    pub featured: Vec<Product>,
    /// Results of the last successful search.
    pub search_results: Vec<Product>,
    /// Text in the search box.
    pub query: String,
    /// Slug of the category being browsed, if any.
    pub selected_category: Option<String>,
}

/// Home screen state and actions. Clones share state.
#[derive(Clone)]
pub struct HomeScreen {
    catalog: CatalogClient,
    navigator: Arc<dyn Navigator>,
    lifecycle: Lifecycle,
    state: Arc<RwLock<HomeState>>,
}

impl HomeScreen {
    pub fn new(catalog: CatalogClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            catalog,
            navigator,
            lifecycle: Lifecycle::new(),
            state: Arc::new(RwLock::new(HomeState::default())),
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Mount and load categories and featured products concurrently.
    ///
    /// A failed load leaves its section empty.
    pub async fn mount(&self) {
        let token = self.lifecycle.mount();

        let (categories, featured) = futures::join!(
            self.catalog.categories(),
            self.catalog.featured_products()
        );

        token.apply(|| {
            let mut state = self.state.write();
            state.categories = categories.unwrap_or_default();
            state.featured = featured.unwrap_or_default();
        });
    }

    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> HomeState {
        self.state.read().clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.state.write().query = query.into();
    }

    /// Run the search typed in the search box.
    ///
    /// A blank query clears the results without a request. On success the
    /// results replace the previous ones and the search box is cleared. On
    /// failure the screen is left as it was.
    pub async fn search(&self) -> Result<(), AppError> {
        let query = self.state.read().query.trim().to_string();
        if query.is_empty() {
            self.state.write().search_results.clear();
            return Ok(());
        }

        let token = self.lifecycle.token().ok_or(AppError::NotMounted)?;
        let results = self.catalog.search(&query).await?;
        token.apply(|| {
            let mut state = self.state.write();
            state.search_results = results;
            state.query.clear();
        });
        Ok(())
    }

    /// Replace the listing with the products of one category.
    pub async fn select_category(&self, slug: &str) -> Result<(), AppError> {
        let token = self.lifecycle.token().ok_or(AppError::NotMounted)?;
        let products = self.catalog.products_by_category(slug).await?;
        token.apply(|| {
            let mut state = self.state.write();
            state.featured = products;
            state.selected_category = Some(slug.to_string());
        });
        Ok(())
    }

    /// Go back to the unfiltered featured listing.
    pub async fn show_all(&self) -> Result<(), AppError> {
        let token = self.lifecycle.token().ok_or(AppError::NotMounted)?;
        let products = self.catalog.featured_products().await?;
        token.apply(|| {
            let mut state = self.state.write();
            state.featured = products;
            state.selected_category = None;
            state.search_results.clear();
        });
        Ok(())
    }

    /// Search results when there are any, otherwise the listing.
    pub fn visible_products(&self) -> Vec<Product> {
        let state = self.state.read();
        if state.search_results.is_empty() {
            state.featured.clone()
        } else {
            state.search_results.clone()
        }
    }

    pub fn open_product(&self, product: &Product) {
        self.navigator.navigate(Route::product(product.slug.clone()));
    }

    pub fn open_cart(&self) {
        self.navigator.navigate(Route::Cart);
    }
}
