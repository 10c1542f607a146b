//! Cache Store Contract
//!
//! Object-safe interface over the key-value store backing the cache layer.
//! Entries are serialized JSON strings with no expiration; a key persists
//! until the store is cleared externally.

use async_trait::async_trait;

use crate::error::Result;

// == Cache Store Trait ==
/// Key-value store used by the cache-aside policy.
///
/// Implementations must be safe to share across tasks; every method takes
/// `&self` and suspends instead of blocking.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the payload stored under `key`, or None if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `payload` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, payload: &str) -> Result<()>;
}
