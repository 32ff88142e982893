//! Key-value storage port.
//!
//! The platform provides the real store (e.g. the host application's async
//! storage); the SDK only needs this narrow string-keyed contract for token
//! persistence. An in-memory implementation backs tests and environments
//! without durable storage.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Async string-only key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads a value, `None` when the key is absent
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Writes a value, replacing any existing one
    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Removes a key; removing an absent key is not an error
    async fn remove_item(&self, key: &str) -> DomainResult<()>;

    /// Removes every key
    async fn clear(&self) -> DomainResult<()>;
}
