//! File-backed key/value cache.
//!
//! The whole store is one JSON object in one file. Every read loads the full file
//! and every save rewrites it. There is no locking: overlapping saves race and the
//! last rename wins. Writes go through a temp file and a rename, so a reader sees
//! either the old or the new file, never a torn one.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::error::{McpError, Result};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// JSON object cache persisted at a fixed path.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// Create a store backed by `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full store. Missing or corrupt content reads as empty.
    async fn read_all(&self) -> Map<String, JsonValue> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Map::new(),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read cache file");
                return Map::new();
            }
        };

        match serde_json::from_slice::<JsonValue>(&bytes) {
            Ok(JsonValue::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "cache file is corrupt, treating as empty");
                Map::new()
            }
        }
    }

    async fn write_all(&self, data: &Map<String, JsonValue>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                McpError::LocalStore(format!(
                    "failed to create cache directory {}: {error}",
                    parent.display()
                ))
            })?;
        }

        let serialized = serde_json::to_vec_pretty(data)
            .map_err(|error| McpError::LocalStore(format!("cache serialize error: {error}")))?;

        let tmp_path = self.temp_path();
        tokio::fs::write(&tmp_path, serialized).await.map_err(|error| {
            McpError::LocalStore(format!(
                "failed to write cache file {}: {error}",
                tmp_path.display()
            ))
        })?;

        if let Err(error) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(McpError::LocalStore(format!(
                "failed to finalize cache file {}: {error}",
                self.path.display()
            )));
        }

        Ok(())
    }

    // Unique per write so overlapping saves never share a temp file.
    fn temp_path(&self) -> PathBuf {
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut name = self
            .path
            .file_name()
            .map(|f| f.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.{}.tmp", std::process::id(), n));
        self.path.with_file_name(name)
    }

    /// Set `key` to `value` and rewrite the store.
    ///
    /// A corrupt file is replaced, not merged.
    pub async fn save(&self, key: &str, value: JsonValue) -> Result<()> {
        let mut data = self.read_all().await;
        data.insert(key.to_string(), value);
        self.write_all(&data).await?;
        debug!(key, path = %self.path.display(), "saved cache entry");
        Ok(())
    }

    /// Value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<JsonValue> {
        self.read_all().await.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_in(dir: &tempfile::TempDir) -> CacheStore {
        CacheStore::new(dir.path().join("cache.json"))
    }

    #[tokio::test]
    async fn test_get_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("shareToken").await, None);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("shareToken", json!("abc123")).await.unwrap();
        assert_eq!(store.get("shareToken").await, Some(json!("abc123")));
        assert_eq!(store.get("other").await, None);
    }

    #[tokio::test]
    async fn test_round_trip_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let value = json!({"nested": [1, 2, {"deep": true}], "s": "x"});

        store_in(&dir).save("blob", value.clone()).await.unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("blob").await, Some(value));
    }

    #[tokio::test]
    async fn test_save_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("a", json!(1)).await.unwrap();
        store.save("b", json!(2)).await.unwrap();

        assert_eq!(store.get("a").await, Some(json!(1)));
        assert_eq!(store.get("b").await, Some(json!(2)));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.get("shareToken").await, None);

        store.save("shareToken", json!("fresh")).await.unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let parsed: JsonValue = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, json!({"shareToken": "fresh"}));
    }

    #[tokio::test]
    async fn test_non_object_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "[1, 2, 3]").unwrap();

        assert_eq!(store.get("0").await, None);
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("nested").join("cache.json"));

        store.save("k", json!("v")).await.unwrap();
        assert_eq!(store.get("k").await, Some(json!("v")));
    }

    #[tokio::test]
    async fn test_concurrent_saves_last_writer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let first = store.clone();
        let second = store.clone();
        let (a, b) = tokio::join!(
            first.save("k", json!("first value, longer than the other")),
            second.save("k", json!("v2")),
        );
        a.unwrap();
        b.unwrap();

        let stored = store.get("k").await.unwrap();
        assert!(
            stored == json!("first value, longer than the other") || stored == json!("v2"),
            "unexpected value: {}",
            stored
        );

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(serde_json::from_str::<JsonValue>(&raw).is_ok());
    }

    #[tokio::test]
    async fn test_unwritable_location_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = CacheStore::new(blocker.join("cache.json"));

        let err = store.save("k", json!("v")).await.unwrap_err();
        assert!(matches!(err, McpError::LocalStore(_)));
        assert_eq!(store.get("k").await, None);
    }
}
