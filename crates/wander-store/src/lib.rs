//! Storage layer for the WanderMart core
//!
//! A string-keyed blob store holds one JSON-serialized slice per entity
//! type. Each repository reads its full slice (seeding fixtures on first
//! read) and overwrites it as a unit on every write. There are no
//! transactions and no multi-key atomicity; concurrent writers on the same
//! key are last-write-wins by contract.

pub mod blob;
pub mod error;
pub mod fixtures;
pub mod repository;

pub use blob::{BlobStore, FileStore, MemoryStore};
pub use error::{Result, StoreError};
pub use repository::{
    AttractionRepository, OrderRepository, PostRepository, ProductRepository, UserRepository,
};
