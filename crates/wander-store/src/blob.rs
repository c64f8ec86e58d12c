//! Blob store backings
//!
//! The store contract is deliberately small: get a blob by key, overwrite a
//! blob by key. No versioning, no compare-and-swap. The in-memory backing
//! is for tests and ephemeral runs; the file backing survives restarts.

use async_trait::async_trait;
use dashmap::DashMap;
use std::path::PathBuf;

use crate::error::Result;

/// String-keyed blob store. One logical partition per application instance.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Get a blob, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite a blob. Last write wins.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;
}

/// Keys under which entity slices are stored.
pub mod keys {
    pub const USERS: &str = "users";
    pub const ATTRACTIONS: &str = "attractions";
    pub const POSTS: &str = "posts";
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
}

/// In-memory store backed by DashMap
#[derive(Default)]
pub struct MemoryStore {
    data: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }
}

/// Durable store: one JSON blob file per key under a state directory
#[derive(Debug)]
pub struct FileStore {
    state_dir: PathBuf,
}

impl FileStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Result<Self> {
        let state_dir = state_dir.into();
        if !state_dir.exists() {
            std::fs::create_dir_all(&state_dir)?;
        }
        tracing::info!("File store opened at {}", state_dir.display());
        Ok(Self { state_dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.state_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl BlobStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.blob_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        tokio::fs::write(self.blob_path(key), value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_basic_operations() -> Result<()> {
        let store = MemoryStore::new();

        assert_eq!(store.get("users").await?, None);

        store.set("users", vec![1, 2, 3]).await?;
        assert_eq!(store.get("users").await?, Some(vec![1, 2, 3]));

        // Overwrite: last write wins
        store.set("users", vec![9]).await?;
        assert_eq!(store.get("users").await?, Some(vec![9]));

        Ok(())
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;

        {
            let store = FileStore::new(temp_dir.path())?;
            store.set("orders", b"[]".to_vec()).await?;
        }

        // A fresh store over the same directory sees the blob
        let reopened = FileStore::new(temp_dir.path())?;
        assert_eq!(reopened.get("orders").await?, Some(b"[]".to_vec()));
        assert_eq!(reopened.get("never-written").await?, None);

        Ok(())
    }
}
