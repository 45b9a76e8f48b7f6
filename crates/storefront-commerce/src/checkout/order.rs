//! Order placement.

use crate::cart::{CartItem, CartRepository, CartStore};
use crate::error::CommerceError;
use crate::price::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a cart at the moment it was ordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Lines as they were in the cart.
    pub items: Vec<CartItem>,
    /// Units across all lines.
    pub item_count: u64,
    /// Order total.
    pub total: Price,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// Place an order for everything in `store`, then clear it.
///
/// Fails with [`CommerceError::EmptyCart`] when there is nothing to order,
/// leaving the store untouched.
pub fn place_order<R: CartRepository>(
    store: &mut CartStore<R>,
) -> Result<OrderSummary, CommerceError> {
    if store.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let summary = OrderSummary {
        items: store.items().to_vec(),
        item_count: store.item_count(),
        total: store.total()?,
        placed_at: Utc::now(),
    };
    store.clear()?;

    tracing::info!(
        lines = summary.items.len(),
        total = %summary.total,
        "order placed"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Quantity, SessionCartRepository};
    use storefront_cache::MemoryStore;

    #[test]
    fn test_place_order_snapshots_and_clears() {
        let backend = MemoryStore::new();
        let mut store = CartStore::load(SessionCartRepository::new(backend.clone()));
        store
            .add_item(CartItem::new(1, "a", "", Price::new(50), Quantity::ONE))
            .unwrap();
        store
            .add_item(CartItem::new(2, "b", "", Price::new(30), Quantity::new(2).unwrap()))
            .unwrap();

        let order = place_order(&mut store).unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count, 3);
        assert_eq!(order.total, Price::new(110));
        assert!(store.is_empty());
        assert!(CartStore::load(SessionCartRepository::new(backend)).is_empty());
    }

    #[test]
    fn test_place_order_on_empty_cart() {
        let mut store = CartStore::load(SessionCartRepository::new(MemoryStore::new()));
        assert!(matches!(place_order(&mut store), Err(CommerceError::EmptyCart)));
    }
}
