//! File-based Key-Value Store Adapter
//!
//! Stores each key as `<key>.json` under a base directory. Writes go to a
//! temporary file first and are renamed into place.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_key, KeyValueStore, KeyValueStoreError};

const VALUE_EXTENSION: &str = "json";

/// File-based key-value store
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/state");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", key, VALUE_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}.tmp", key, VALUE_EXTENSION))
    }

    async fn ensure_dir(&self) -> Result<(), KeyValueStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        validate_key(key)?;
        match fs::read_to_string(self.value_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueStoreError::IoError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        self.ensure_dir().await?;

        let temp = self.temp_path(key);
        fs::write(&temp, value)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;
        fs::rename(&temp, self.value_path(key))
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        validate_key(key)?;
        match fs::remove_file(self.value_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueStoreError::IoError(e.to_string())),
        }
    }

    async fn clear(&self) -> Result<(), KeyValueStoreError> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(KeyValueStoreError::IoError(e.to_string())),
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(VALUE_EXTENSION) {
                fs::remove_file(&path)
                    .await
                    .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn set_and_get_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("questionnaire_answers", "{\"3\":1}").await.unwrap();

        let value = store.get("questionnaire_answers").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"3\":1}"));
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert!(store.get("questionnaire_answers").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("state");
        let store = FileKeyValueStore::new(&nested);

        store.set("k", "v").await.unwrap();

        assert!(nested.join("k.json").exists());
        assert!(!nested.join("k.json.tmp").exists());
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn remove_deletes_and_tolerates_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();

        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_values_only() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        std::fs::write(temp_dir.path().join("notes.txt"), "keep me").unwrap();

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.clear().await.unwrap();

        assert!(store.get("a").await.unwrap().is_none());
        assert!(store.get("b").await.unwrap().is_none());
        assert!(temp_dir.path().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn clear_on_missing_directory_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("never-created"));

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn values_survive_a_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();
        FileKeyValueStore::new(temp_dir.path())
            .set("major_quiz_results", "{}")
            .await
            .unwrap();

        let reopened = FileKeyValueStore::new(temp_dir.path());
        assert_eq!(
            reopened.get("major_quiz_results").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn invalid_key_never_touches_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        let result = store.set("../outside", "v").await;
        assert!(matches!(result, Err(KeyValueStoreError::InvalidKey(_))));
    }
}
