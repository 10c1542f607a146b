//! In-Memory Store
//!
//! HashMap-backed CacheStore used by tests and as the degraded-mode
//! fallback when Redis is unreachable at startup.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::error::Result;

// == Memory Store ==
/// Volatile cache store holding entries in a guarded HashMap.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if `key` currently holds a payload.
    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, payload: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
