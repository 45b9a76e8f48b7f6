//! Session-scoped key-value storage for the storefront client.
//!
//! Provides a small storage seam ([`KeyValueStore`]) with in-memory and
//! file-backed implementations, per-session key namespacing, and a typed
//! JSON [`Cache`] on top.
//!
//! # Example
//!
//! ```rust
//! use storefront_cache::{Cache, MemoryStore, SessionId, SessionStorage};
//!
//! let session = SessionStorage::new(MemoryStore::new(), SessionId::generate());
//! let cache = Cache::new(session);
//!
//! cache.set("cart", &vec![1, 2, 3]).unwrap();
//! let cart: Option<Vec<i32>> = cache.get("cart").unwrap();
//! assert_eq!(cart, Some(vec![1, 2, 3]));
//! ```

mod error;
mod file;
mod kv;
mod memory;
mod session;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;
pub use session::{SessionId, SessionStorage};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Cache, CacheError, FileStore, KeyValueStore, MemoryStore, SessionId, SessionStorage,
    };
}
