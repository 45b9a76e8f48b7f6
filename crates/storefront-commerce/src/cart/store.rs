//! The cart store: canonical in-memory cart with write-through persistence.

use crate::cart::{cart_total, CartItem, CartRepository, CartSummary};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::price::Price;

/// Owns the cart lines and keeps them in sync with a [`CartRepository`].
///
/// Every mutator rewrites the full persisted cart before returning, including
/// mutators that turn out to be no-ops. Lines keep insertion order and no two
/// lines share a product id.
///
/// If the write fails the in-memory change is kept and the error is returned,
/// so the caller can decide whether to surface it.
#[derive(Debug)]
pub struct CartStore<R> {
    repository: R,
    items: Vec<CartItem>,
}

impl<R: CartRepository> CartStore<R> {
    /// Rehydrate the cart from `repository`.
    ///
    /// Missing or unreadable data yields an empty cart.
    pub fn load(repository: R) -> Self {
        let items = repository.read();
        tracing::debug!(lines = items.len(), "cart loaded");
        Self { repository, items }
    }

    /// Current lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Find the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty.get())).sum()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Result<Price, CommerceError> {
        cart_total(&self.items)
    }

    /// Per-line totals plus the grand total.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        CartSummary::from_items(&self.items)
    }

    /// The repository this cart persists to.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Add a line, merging into an existing line with the same id.
    ///
    /// On merge only the quantity changes; the existing line keeps its
    /// captured price, name and image.
    pub fn add_item(&mut self, candidate: CartItem) -> Result<(), CommerceError> {
        match self.items.iter_mut().find(|i| i.id == candidate.id) {
            Some(existing) => {
                existing.qty = existing
                    .qty
                    .checked_add(candidate.qty)
                    .ok_or(CommerceError::Overflow)?;
                tracing::debug!(id = %candidate.id, qty = %existing.qty, "cart line merged");
            }
            None => {
                tracing::debug!(id = %candidate.id, qty = %candidate.qty, "cart line added");
                self.items.push(candidate);
            }
        }
        self.persist()
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: ProductId) -> Result<bool, CommerceError> {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() < len_before;
        self.persist()?;
        Ok(removed)
    }

    /// Add one unit to the line for `id`. Returns whether a line changed.
    pub fn increase_qty(&mut self, id: ProductId) -> Result<bool, CommerceError> {
        let changed = match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.qty = item.qty.increment().ok_or(CommerceError::Overflow)?;
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(changed)
    }

    /// Take one unit off the line for `id`, never going below one.
    ///
    /// Returns whether a line changed; a line at quantity one is left as is.
    pub fn decrease_qty(&mut self, id: ProductId) -> Result<bool, CommerceError> {
        let changed = match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => match item.qty.decrement() {
                Some(qty) => {
                    item.qty = qty;
                    true
                }
                None => false,
            },
            None => false,
        };
        self.persist()?;
        Ok(changed)
    }

    /// Remove all lines.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.persist()
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.repository.write(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Quantity, SessionCartRepository};
    use parking_lot::Mutex;
    use storefront_cache::MemoryStore;

    fn item(id: i64, price: i64, qty: i64) -> CartItem {
        CartItem::new(id, format!("item-{id}"), format!("{id}.png"), Price::new(price), Quantity::new(qty).unwrap())
    }

    fn store() -> CartStore<SessionCartRepository<MemoryStore>> {
        CartStore::load(SessionCartRepository::new(MemoryStore::new()))
    }

    /// Repository recording every write.
    #[derive(Default)]
    struct RecordingRepository {
        writes: Mutex<Vec<Vec<CartItem>>>,
    }

    impl CartRepository for RecordingRepository {
        fn read(&self) -> Vec<CartItem> {
            Vec::new()
        }

        fn write(&self, items: &[CartItem]) -> Result<(), CommerceError> {
            self.writes.lock().push(items.to_vec());
            Ok(())
        }
    }

    struct FailingRepository;

    impl CartRepository for FailingRepository {
        fn read(&self) -> Vec<CartItem> {
            Vec::new()
        }

        fn write(&self, _items: &[CartItem]) -> Result<(), CommerceError> {
            Err(CommerceError::StorageError("disk full".to_string()))
        }
    }

    #[test]
    fn test_load_empty() {
        let cart = store();
        assert!(cart.is_empty());
        assert_eq!(cart.total().unwrap(), Price::ZERO);
    }

    #[test]
    fn test_add_distinct_ids_preserves_order() {
        let mut cart = store();
        cart.add_item(item(3, 10, 1)).unwrap();
        cart.add_item(item(1, 10, 2)).unwrap();
        cart.add_item(item(2, 10, 3)).unwrap();

        let ids: Vec<i64> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_duplicate_merges_and_keeps_first_price() {
        let mut cart = store();
        cart.add_item(item(1, 100, 2)).unwrap();
        cart.add_item(CartItem::new(1, "renamed", "new.png", Price::new(999), Quantity::ONE))
            .unwrap();

        assert_eq!(cart.len(), 1);
        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.qty.get(), 3);
        assert_eq!(line.price, Price::new(100));
        assert_eq!(line.name, "item-1");
        assert_eq!(line.image, "1.png");
    }

    #[test]
    fn test_quantities_sum_per_id() {
        let mut cart = store();
        let adds = [(1, 2), (2, 1), (1, 5), (3, 4), (2, 2)];
        for (id, qty) in adds {
            cart.add_item(item(id, 10, qty)).unwrap();
        }

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().qty.get(), 7);
        assert_eq!(cart.get(ProductId::new(2)).unwrap().qty.get(), 3);
        assert_eq!(cart.get(ProductId::new(3)).unwrap().qty.get(), 4);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = store();
        cart.add_item(item(1, 50, 1)).unwrap();
        cart.add_item(item(2, 30, 2)).unwrap();

        assert!(cart.remove_item(ProductId::new(2)).unwrap());
        assert!(!cart.remove_item(ProductId::new(2)).unwrap());

        assert_eq!(cart.items(), &[item(1, 50, 1)]);
        assert_eq!(cart.total().unwrap(), Price::new(50));
    }

    #[test]
    fn test_increase_qty() {
        let mut cart = store();
        cart.add_item(item(1, 10, 1)).unwrap();

        assert!(cart.increase_qty(ProductId::new(1)).unwrap());
        assert_eq!(cart.get(ProductId::new(1)).unwrap().qty.get(), 2);
        assert!(!cart.increase_qty(ProductId::new(9)).unwrap());
    }

    #[test]
    fn test_decrease_qty_floors_at_one() {
        let mut cart = store();
        cart.add_item(item(1, 10, 2)).unwrap();

        assert!(cart.decrease_qty(ProductId::new(1)).unwrap());
        assert!(!cart.decrease_qty(ProductId::new(1)).unwrap());
        assert_eq!(cart.get(ProductId::new(1)).unwrap().qty, Quantity::ONE);
        assert!(!cart.decrease_qty(ProductId::new(9)).unwrap());
    }

    #[test]
    fn test_clear() {
        let mut cart = store();
        cart.add_item(item(1, 10, 2)).unwrap();
        cart.clear().unwrap();

        assert!(cart.is_empty());
        assert!(cart.repository().read().is_empty());
    }

    #[test]
    fn test_mutations_survive_reload() {
        let backend = MemoryStore::new();
        let mut cart = CartStore::load(SessionCartRepository::new(backend.clone()));
        cart.add_item(item(1, 10, 1)).unwrap();
        cart.add_item(item(2, 20, 1)).unwrap();
        cart.increase_qty(ProductId::new(2)).unwrap();

        let reloaded = CartStore::load(SessionCartRepository::new(backend));
        assert_eq!(reloaded.items(), cart.items());
        assert_eq!(reloaded.total().unwrap(), Price::new(50));
    }

    #[test]
    fn test_every_mutator_writes_full_cart() {
        let mut cart = CartStore::load(RecordingRepository::default());
        cart.add_item(item(1, 10, 1)).unwrap();
        cart.add_item(item(2, 10, 1)).unwrap();
        cart.increase_qty(ProductId::new(1)).unwrap();
        cart.decrease_qty(ProductId::new(2)).unwrap();
        cart.remove_item(ProductId::new(7)).unwrap();
        cart.clear().unwrap();

        let writes = cart.repository().writes.lock();
        assert_eq!(writes.len(), 6);
        assert_eq!(writes[1].len(), 2);
        assert_eq!(writes[2][0].qty.get(), 2);
        assert!(writes[5].is_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut cart = CartStore::load(FailingRepository);
        let result = cart.add_item(item(1, 10, 1));

        assert!(matches!(result, Err(CommerceError::StorageError(_))));
        assert_eq!(cart.len(), 1);
    }
}
