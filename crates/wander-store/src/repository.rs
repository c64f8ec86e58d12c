//! Entity repositories
//!
//! Each repository owns one fixed key in the blob store and moves the full
//! entity slice in and out as a JSON document. `load` seeds the default
//! fixtures when the key has never been written.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use wander_types::{Attraction, Order, Post, Product, User};

use crate::blob::{keys, BlobStore};
use crate::error::Result;
use crate::fixtures;

async fn load_slice<T>(store: &dyn BlobStore, key: &str, seed: fn() -> Vec<T>) -> Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
{
    match store.get(key).await? {
        Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
        None => {
            let slice = seed();
            debug!("Seeding '{}' with {} fixture records", key, slice.len());
            store.set(key, serde_json::to_vec(&slice)?).await?;
            Ok(slice)
        }
    }
}

async fn save_slice<T: Serialize>(store: &dyn BlobStore, key: &str, slice: &[T]) -> Result<()> {
    store.set(key, serde_json::to_vec(slice)?).await
}

/// Users slice. Never shrinks: users are not deleted.
pub struct UserRepository {
    store: Arc<dyn BlobStore>,
}

impl UserRepository {
    pub const KEY: &'static str = keys::USERS;

    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Vec<User>> {
        load_slice(&*self.store, Self::KEY, fixtures::users).await
    }

    pub async fn save(&self, users: &[User]) -> Result<()> {
        save_slice(&*self.store, Self::KEY, users).await
    }
}

/// Attractions slice, admin-managed.
pub struct AttractionRepository {
    store: Arc<dyn BlobStore>,
}

impl AttractionRepository {
    pub const KEY: &'static str = keys::ATTRACTIONS;

    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Vec<Attraction>> {
        load_slice(&*self.store, Self::KEY, fixtures::attractions).await
    }

    pub async fn save(&self, attractions: &[Attraction]) -> Result<()> {
        save_slice(&*self.store, Self::KEY, attractions).await
    }
}

/// Review posts slice, including reported entries.
pub struct PostRepository {
    store: Arc<dyn BlobStore>,
}

impl PostRepository {
    pub const KEY: &'static str = keys::POSTS;

    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Vec<Post>> {
        load_slice(&*self.store, Self::KEY, fixtures::posts).await
    }

    pub async fn save(&self, posts: &[Post]) -> Result<()> {
        save_slice(&*self.store, Self::KEY, posts).await
    }
}

/// Products slice, append-only in this core.
pub struct ProductRepository {
    store: Arc<dyn BlobStore>,
}

impl ProductRepository {
    pub const KEY: &'static str = keys::PRODUCTS;

    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Vec<Product>> {
        load_slice(&*self.store, Self::KEY, fixtures::products).await
    }

    pub async fn save(&self, products: &[Product]) -> Result<()> {
        save_slice(&*self.store, Self::KEY, products).await
    }
}

/// Orders slice.
pub struct OrderRepository {
    store: Arc<dyn BlobStore>,
}

impl OrderRepository {
    pub const KEY: &'static str = keys::ORDERS;

    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Vec<Order>> {
        load_slice(&*self.store, Self::KEY, fixtures::orders).await
    }

    pub async fn save(&self, orders: &[Order]) -> Result<()> {
        save_slice(&*self.store, Self::KEY, orders).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryStore;

    #[tokio::test]
    async fn test_seeds_fixtures_on_first_read() -> Result<()> {
        let store = Arc::new(MemoryStore::new());
        let repo = AttractionRepository::new(store.clone());

        // Nothing written yet
        assert!(store.get(AttractionRepository::KEY).await?.is_none());

        let seeded = repo.load().await?;
        assert!(!seeded.is_empty());

        // Seeding is persisted, not recomputed per read
        assert!(store.get(AttractionRepository::KEY).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_read_is_idempotent() -> Result<()> {
        let store = Arc::new(MemoryStore::new());
        let repo = UserRepository::new(store);

        let first = repo.load().await?;
        let second = repo.load().await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_overwrites_full_slice() -> Result<()> {
        let store = Arc::new(MemoryStore::new());
        let repo = PostRepository::new(store);

        let mut posts = repo.load().await?;
        posts.clear();
        repo.save(&posts).await?;

        assert!(repo.load().await?.is_empty());
        Ok(())
    }
}
