//! Key-value storage backing the activity cache.
//!
//! The cache is advisory: a read fault is a miss, a write fault is the
//! caller's problem to swallow. Carried in `AppState` as `Arc<dyn KvStore>`
//! so the activity pipeline is testable without touching the filesystem.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the stored value. Missing key and any read fault both
    /// come back as `None`.
    async fn get(&self, key: &str) -> Option<String>;

    /// Persists a value. Errors surface so the caller can decide whether
    /// the write matters.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Best-effort delete; faults are ignored.
    async fn remove(&self, key: &str);
}

/// File-per-key store rooted at a configured directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal constants; sanitize anyway so no key can escape the root.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        tokio::fs::read_to_string(self.path_for(key)).await.ok()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("creating cache dir {}", self.root.display()))?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .with_context(|| format!("writing cache key '{key}'"))
    }

    async fn remove(&self, key: &str) {
        let _ = tokio::fs::remove_file(self.path_for(key)).await;
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
