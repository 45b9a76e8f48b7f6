//! Key-Value store abstraction with automatic serialization.

use std::sync::Arc;

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A raw string-keyed byte store.
///
/// Implementations decide where the bytes live (process memory, files on
/// disk). Writes fully replace the previous value of a key.
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys currently stored.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist. A stored value that fails to
    /// decode is reported as [`CacheError::SerializeError`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<CartItem>> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// let key = storefront_cache::cache_key!("session", "abc", "cart");
/// assert_eq!(key, "session:abc:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        id: i64,
        qty: u32,
    }

    #[test]
    fn test_cache_round_trips_json() {
        let cache = Cache::new(MemoryStore::new());
        let lines = vec![Line { id: 1, qty: 2 }];

        cache.set("cart", &lines).unwrap();
        let loaded: Option<Vec<Line>> = cache.get("cart").unwrap();

        assert_eq!(loaded, Some(lines));
        assert_eq!(cache.store().get("cart").unwrap().unwrap(), br#"[{"id":1,"qty":2}]"#);
    }

    #[test]
    fn test_cache_get_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Line>> = cache.get("cart").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_cache_get_malformed_value() {
        let store = MemoryStore::new();
        store.set("cart", b"not json").unwrap();

        let cache = Cache::new(store);
        let result: Result<Option<Vec<Line>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_cache_delete_and_exists() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("cart", &Vec::<Line>::new()).unwrap();
        assert!(cache.exists("cart").unwrap());

        cache.delete("cart").unwrap();
        assert!(!cache.exists("cart").unwrap());
        assert!(cache.keys().unwrap().is_empty());
    }

    #[test]
    fn test_cache_key_macro() {
        let key = cache_key!("session", "sess_1", "cart");
        assert_eq!(key, "session:sess_1:cart");

        let key = cache_key!("product", 42);
        assert_eq!(key, "product:42");
    }

    #[test]
    fn test_arc_store_delegates() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set("a", b"1").unwrap();
        assert!(store.exists("a").unwrap());
        assert_eq!(store.keys().unwrap(), vec!["a".to_string()]);
    }
}
