//! # Key-Value Store
//!
//! A string key → string value store backed by one file per key inside the
//! app's data directory. This is the shape the snapshot and theme layers
//! expect: get/set/remove, values opaque to the store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::PersistError;

// =============================================================================
// KvStore
// =============================================================================

/// A directory-backed key-value store.
///
/// ## Concurrency
/// One app process owns the directory. Writes go through a temp file and a
/// rename so a crash mid-write never leaves a torn value behind; readers see
/// either the old value or the new one.
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "Key-value store opened");
        Ok(KvStore { root })
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a key to its value file.
    ///
    /// Keys are fixed constants in this app ("mini-catalog-state",
    /// "@theme_mode"); the sanitize pass keeps an unexpected key from ever
    /// escaping the root directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '@' => c,
                _ => '_',
            })
            .collect();
        self.root.join(file_name)
    }

    /// Reads the value for `key`, `None` when nothing is stored.
    pub async fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");

        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Removes the value under `key`. Removing an absent key is not an error.
    pub async fn remove(&self, key: &str) -> Result<(), PersistError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> KvStore {
        let root = std::env::temp_dir().join(format!("catalog-kv-{}", uuid::Uuid::new_v4()));
        KvStore::open(root).await.unwrap()
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let store = temp_store().await;

        store.set("mini-catalog-state", "{\"cart\":{}}").await.unwrap();
        let value = store.get("mini-catalog-state").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"cart\":{}}"));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = temp_store().await;
        assert!(store.get("never-written").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = temp_store().await;

        store.set("@theme_mode", "light").await.unwrap();
        store.set("@theme_mode", "dark").await.unwrap();

        assert_eq!(store.get("@theme_mode").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = temp_store().await;

        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());

        // Removing again is still Ok.
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_hostile_key_stays_inside_root() {
        let store = temp_store().await;

        store.set("../escape", "v").await.unwrap();
        let stored = store.get("../escape").await.unwrap();
        assert_eq!(stored.as_deref(), Some("v"));

        // The parent directory gained no file.
        let escaped = store.root().parent().unwrap().join("escape");
        assert!(!escaped.exists());
    }
}
