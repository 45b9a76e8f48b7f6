//! Session-scoped storage on top of a Key-Value store.

use crate::{CacheError, KeyValueStore};
use serde::{Deserialize, Serialize};

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse an externally supplied session ID.
    ///
    /// Rejects empty ids and ids containing `:`, whitespace or control
    /// characters, since the id becomes part of every namespaced key.
    pub fn parse(id: impl Into<String>) -> Result<Self, CacheError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CacheError::InvalidKey("session id cannot be empty".to_string()));
        }
        if let Some(c) = id
            .chars()
            .find(|c| *c == ':' || c.is_whitespace() || c.is_control())
        {
            return Err(CacheError::InvalidKey(format!(
                "session id contains {c:?}: {id:?}"
            )));
        }
        Ok(Self(id))
    }

    /// Generate a new cryptographically secure session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Storage visible to a single browsing session.
///
/// Every key is namespaced as `session:{id}:{key}` in the backing store, with
/// `%` and `:` in the id escaped, so no session's prefix is a prefix of
/// another's and two sessions sharing a backend never see each other's
/// slots. Dropping the session's data is [`SessionStorage::clear`].
///
/// # Example
///
/// ```rust
/// use storefront_cache::{KeyValueStore, MemoryStore, SessionId, SessionStorage};
///
/// let backend = MemoryStore::new();
/// let session = SessionStorage::new(backend.clone(), SessionId::new("abc"));
/// session.set("cart", b"[]").unwrap();
///
/// assert!(backend.exists("session:abc:cart").unwrap());
/// assert_eq!(session.keys().unwrap(), vec!["cart".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct SessionStorage<S> {
    backend: S,
    id: SessionId,
    prefix: String,
}

impl<S: KeyValueStore> SessionStorage<S> {
    /// Scope `backend` to the session `id`.
    pub fn new(backend: S, id: SessionId) -> Self {
        let prefix = format!("{}:", crate::cache_key!("session", escape_id(id.as_str())));
        Self {
            backend,
            id,
            prefix,
        }
    }

    /// The session this storage belongs to.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Remove every key of this session from the backend.
    pub fn clear(&self) -> Result<(), CacheError> {
        for key in self.keys()? {
            self.backend.delete(&self.session_key(&key))?;
        }
        tracing::debug!(session = %self.id, "session storage cleared");
        Ok(())
    }

    fn session_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

fn escape_id(id: &str) -> String {
    id.replace('%', "%25").replace(':', "%3A")
}

impl<S: KeyValueStore> KeyValueStore for SessionStorage<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.backend.get(&self.session_key(key))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.backend.set(&self.session_key(key), value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(&self.session_key(key))
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.backend.exists(&self.session_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self
            .backend
            .keys()?
            .into_iter()
            .filter_map(|k| k.strip_prefix(&self.prefix).map(str::to_string))
            .collect())
    }
}
