//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::DomainResult;

use super::KeyValueStore;

/// Hash-map backed store, shared across clones.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut items = self.items.write().await;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> DomainResult<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }

    async fn clear(&self) -> DomainResult<()> {
        let mut items = self.items.write().await;
        items.clear();
        Ok(())
    }
}
