//! Cart persistence.

use std::sync::Arc;

use storefront_cache::{Cache, KeyValueStore};

use crate::cart::CartItem;
use crate::error::CommerceError;

/// Storage slot holding the cart.
pub const CART_KEY: &str = "cart";

/// Externalizes the cart to a storage medium.
///
/// `read` never fails: a missing or unreadable cart is an empty cart.
/// `write` replaces whatever was stored before; merging is the store's job.
pub trait CartRepository: Send + Sync {
    /// Load the persisted items.
    fn read(&self) -> Vec<CartItem>;

    /// Replace the persisted items with `items`.
    fn write(&self, items: &[CartItem]) -> Result<(), CommerceError>;
}

impl<R: CartRepository + ?Sized> CartRepository for Arc<R> {
    fn read(&self) -> Vec<CartItem> {
        (**self).read()
    }

    fn write(&self, items: &[CartItem]) -> Result<(), CommerceError> {
        (**self).write(items)
    }
}

/// Cart persisted as a JSON array under the `cart` key of a session store.
///
/// # Example
///
/// ```rust
/// use storefront_cache::MemoryStore;
/// use storefront_commerce::cart::{CartRepository, SessionCartRepository};
///
/// let repository = SessionCartRepository::new(MemoryStore::new());
/// assert!(repository.read().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SessionCartRepository<S> {
    cache: Cache<S>,
}

impl<S: KeyValueStore> SessionCartRepository<S> {
    /// Persist the cart in `store`.
    pub fn new(store: S) -> Self {
        Self {
            cache: Cache::new(store),
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }
}

impl<S: KeyValueStore> CartRepository for SessionCartRepository<S> {
    fn read(&self) -> Vec<CartItem> {
        match self.cache.get::<Vec<CartItem>>(CART_KEY) {
            Ok(Some(items)) => merge_duplicates(items),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable saved cart");
                Vec::new()
            }
        }
    }

    fn write(&self, items: &[CartItem]) -> Result<(), CommerceError> {
        self.cache.set(CART_KEY, items)?;
        tracing::debug!(lines = items.len(), "cart persisted");
        Ok(())
    }
}

/// Fold lines sharing an id into the first occurrence, summing quantities.
///
/// Restores the one-line-per-product invariant for blobs written by older
/// clients. A sum that overflows keeps the first line's quantity.
fn merge_duplicates(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items {
        match merged.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                if let Some(qty) = existing.qty.checked_add(item.qty) {
                    existing.qty = qty;
                }
            }
            None => merged.push(item),
        }
    }
    merged
}
