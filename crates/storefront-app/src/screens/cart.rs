//! Cart page.

use std::sync::Arc;

use parking_lot::Mutex;
use storefront_commerce::cart::{CartItem, CartStore, CartSummary};
use storefront_commerce::checkout::{place_order, OrderSummary};
use storefront_commerce::ProductId;

use crate::app::SharedCartRepository;
use crate::error::AppError;

/// Cart page backed by a [`CartStore`]. Clones share the store.
#[derive(Clone)]
pub struct CartScreen {
    store: Arc<Mutex<CartStore<SharedCartRepository>>>,
}

impl CartScreen {
    /// Rehydrate from the repository.
    pub fn new(repository: SharedCartRepository) -> Self {
        Self {
            store: Arc::new(Mutex::new(CartStore::load(repository))),
        }
    }

    /// Re-read the persisted cart, picking up adds made on other screens.
    pub fn mount(&self) {
        let mut store = self.store.lock();
        let repository = store.repository().clone();
        *store = CartStore::load(repository);
    }

    /// Snapshot of the cart lines, in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.store.lock().items().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Line totals, unit count and grand total.
    pub fn summary(&self) -> Result<CartSummary, AppError> {
        Ok(self.store.lock().summary()?)
    }

    /// Add one unit to a line. `false` when no line has `id`.
    pub fn increase(&self, id: ProductId) -> Result<bool, AppError> {
        Ok(self.store.lock().increase_qty(id)?)
    }

    /// Take one unit off a line. A line at one stays at one.
    pub fn decrease(&self, id: ProductId) -> Result<bool, AppError> {
        Ok(self.store.lock().decrease_qty(id)?)
    }

    /// Drop a line. `false` when no line has `id`.
    pub fn remove(&self, id: ProductId) -> Result<bool, AppError> {
        Ok(self.store.lock().remove_item(id)?)
    }

    /// Empty the cart.
    pub fn clear(&self) -> Result<(), AppError> {
        Ok(self.store.lock().clear()?)
    }

    /// Place the order and empty the cart.
    pub fn place_order(&self) -> Result<OrderSummary, AppError> {
        let mut store = self.store.lock();
        Ok(place_order(&mut *store)?)
    }
}
