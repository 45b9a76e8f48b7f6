//! File-backed store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::{CacheError, KeyValueStore};

const ENTRY_EXTENSION: &str = "kv";

/// Key-Value store keeping one file per key under a directory.
///
/// File names are the URL-safe base64 encoding of the key, so namespaced keys
/// such as `session:abc:cart` never touch the path syntax of the host.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_path`, creating the directory if needed.
    pub fn open(base_path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).map_err(|e| {
            CacheError::OpenError(format!("{}: {}", base_path.display(), e))
        })?;
        Ok(Self { base_path })
    }

    /// Directory holding the entries.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, CacheError> {
        validate_key(key)?;
        let name = format!("{}.{}", URL_SAFE_NO_PAD.encode(key), ENTRY_EXTENSION);
        Ok(self.base_path.join(name))
    }
}

/// Reject keys that cannot round-trip through a file name.
fn validate_key(key: &str) -> Result<(), CacheError> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.chars().any(|c| c.is_control()) {
        return Err(CacheError::InvalidKey(format!(
            "key contains control characters: {key:?}"
        )));
    }
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.entry_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.entry_path(key)?;
        let tmp = path.with_extension("tmp");
        let written = fs::write(&tmp, value).and_then(|()| match fs::rename(&tmp, &path) {
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                fs::remove_file(&path)?;
                fs::rename(&tmp, &path)
            }
            other => other,
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::trace!(key, bytes = value.len(), "file store write");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.entry_path(key)?.exists())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().map_or(true, |e| e != ENTRY_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Foreign files in the directory are skipped rather than reported.
            if let Some(key) = URL_SAFE_NO_PAD
                .decode(stem)
                .ok()
                .and_then(|bytes| String::from_utf8(bytes).ok())
            {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("session:sess_1:cart", br#"[{"id":1}]"#).unwrap();
        assert_eq!(
            store.get("session:sess_1:cart").unwrap(),
            Some(br#"[{"id":1}]"#.to_vec())
        );
        assert!(store.exists("session:sess_1:cart").unwrap());
    }

    #[test]
    fn test_file_store_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open(dir.path()).unwrap().set("cart", b"[]").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("cart").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(store.delete("cart").is_ok());
    }

    #[test]
    fn test_file_store_keys_skip_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("b", b"").unwrap();
        store.set("a:1", b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["a:1", "b"]);
    }

    #[test]
    fn test_file_store_rejects_bad_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert!(matches!(store.set("", b""), Err(CacheError::InvalidKey(_))));
        assert!(matches!(store.get("a\0b"), Err(CacheError::InvalidKey(_))));
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let target = store.entry_path("cart").unwrap();
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), b"").unwrap();

        assert!(store.set("cart", b"[]").is_err());
        assert!(!target.with_extension("tmp").exists());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("session");
        let store = FileStore::open(&nested).unwrap();
        assert!(store.base_path().is_dir());
    }
}
