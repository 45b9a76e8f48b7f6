//! Product page: details, related products and the add-to-cart form.

use std::sync::Arc;

use parking_lot::RwLock;
use storefront_commerce::cart::{parse_quantity, AddToCart, CartItem, CartStore};
use storefront_commerce::catalog::Product;
use storefront_data::CatalogClient;

use crate::app::SharedCartRepository;
use crate::error::AppError;
use crate::lifecycle::Lifecycle;

/// What the product page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailState {
    /// The product, once loaded.
    pub product: Option<Product>,
    /// Products shown under "related".
    pub related: Vec<Product>,
    /// Raw text of the quantity box.
    pub quantity_input: String,
}

impl Default for ProductDetailState {
    fn default() -> Self {
        Self {
            product: None,
            related: Vec::new(),
            quantity_input: "1".to_string(),
        }
    }
}

/// Product page for one slug. Clones share state.
#[derive(Clone)]
pub struct ProductDetailScreen {
    catalog: CatalogClient,
    cart: SharedCartRepository,
    slug: String,
    lifecycle: Lifecycle,
    state: Arc<RwLock<ProductDetailState>>,
}

impl ProductDetailScreen {
    pub fn new(catalog: CatalogClient, cart: SharedCartRepository, slug: impl Into<String>) -> Self {
        Self {
            catalog,
            cart,
            slug: slug.into(),
            lifecycle: Lifecycle::new(),
            state: Arc::new(RwLock::new(ProductDetailState::default())),
        }
    }

    /// The slug this page was opened for.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Mount and load the product with its related products.
    pub async fn mount(&self) -> Result<(), AppError> {
        let token = self.lifecycle.mount();
        let detail = self.catalog.product_detail(&self.slug).await?;
        token.apply(|| {
            let mut state = self.state.write();
            state.product = Some(detail.product);
            state.related = detail.related;
        });
        Ok(())
    }

    pub fn unmount(&self) {
        self.lifecycle.unmount();
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ProductDetailState {
        self.state.read().clone()
    }

    pub fn product(&self) -> Option<Product> {
        self.state.read().product.clone()
    }

    pub fn set_quantity(&self, input: impl Into<String>) {
        self.state.write().quantity_input = input.into();
    }

    /// Add the loaded product to the persisted cart.
    ///
    /// Returns the cart line after the add, merged with any earlier line for
    /// the same product. An invalid quantity leaves the cart untouched.
    pub fn add_to_cart(&self) -> Result<CartItem, AppError> {
        let (product, input) = {
            let state = self.state.read();
            (state.product.clone(), state.quantity_input.clone())
        };
        let product = product.ok_or(AppError::NotLoaded("product"))?;
        let qty = parse_quantity(&input)?;

        let mut store = CartStore::load(self.cart.clone());
        AddToCart::new(&product, qty).apply(&mut store)?;

        store
            .get(product.id)
            .cloned()
            .ok_or(AppError::NotLoaded("cart line"))
    }
}
