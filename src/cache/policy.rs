//! Cache-Aside Policy
//!
//! Read-through lookup over a CacheStore: serve from the store when the
//! key is present, otherwise run the caller's producer once and populate
//! the store with its result. Store failures are never fatal; a broken
//! store degrades the policy to a pass-through.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::cache::stats::{CacheStats, Counters};
use crate::cache::CacheStore;
use crate::error::Result;

// == Cache-Aside Policy ==
/// Read-through cache over an injected store.
///
/// Concurrent lookups for the same key are coalesced: the first caller
/// through the per-key gate produces and writes, later callers observe
/// the stored value on their re-check without invoking their producers.
pub struct CacheAside {
    store: Arc<dyn CacheStore>,
    log_hits: bool,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    counters: Counters,
}

impl CacheAside {
    // == Constructor ==
    /// Creates a policy over `store`.
    ///
    /// # Arguments
    /// * `store` - Key-value store holding serialized payloads
    /// * `log_hits` - Whether hits are logged (misses always are)
    pub fn new(store: Arc<dyn CacheStore>, log_hits: bool) -> Self {
        Self {
            store,
            log_hits,
            in_flight: Mutex::new(HashMap::new()),
            counters: Counters::default(),
        }
    }

    // == Resolve ==
    /// Returns the value under `key`, producing and storing it on miss.
    ///
    /// The producer runs only when the store cannot answer; its failure
    /// propagates unchanged and leaves the store untouched. A successful
    /// produce is written back best-effort: serialization or store errors
    /// are logged and the fresh value is still returned.
    pub async fn resolve<T, F, Fut>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        // Fast path, no gate
        if let Some(value) = self.read::<T>(key).await {
            self.record_hit(key);
            return Ok(value);
        }

        let gate = self.acquire_gate(key).await;
        let result = {
            let _guard = gate.lock().await;

            // A concurrent caller may have populated the key while we
            // waited on the gate
            match self.read::<T>(key).await {
                Some(value) => {
                    self.record_hit(key);
                    Ok(value)
                }
                None => {
                    self.counters.record_miss();
                    info!("cache miss, fetching upstream: {}", key);
                    match producer().await {
                        Ok(value) => {
                            self.write(key, &value).await;
                            Ok(value)
                        }
                        Err(err) => Err(err),
                    }
                }
            }
        };
        self.release_gate(key, gate).await;

        result
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    fn record_hit(&self, key: &str) {
        self.counters.record_hit();
        if self.log_hits {
            info!("cache hit: {}", key);
        }
    }

    // == Store Access ==
    /// Reads and decodes `key`, treating store errors and undecodable
    /// payloads as misses.
    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key).await {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!("discarding undecodable cache payload for {}: {}", key, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("cache read failed for {}: {}", key, err);
                None
            }
        }
    }

    /// Serializes and stores `value` under `key`, logging failures
    /// instead of surfacing them.
    async fn write<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("skipping cache write for {}: {}", key, err);
                return;
            }
        };

        if let Err(err) = self.store.set(key, &payload).await {
            warn!("cache write failed for {}: {}", key, err);
        }
    }

    // == In-Flight Gate ==
    /// Returns the shared gate for `key`, creating it if absent.
    async fn acquire_gate(&self, key: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        Arc::clone(
            in_flight
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    /// Drops our clone of the gate and removes the registry entry once
    /// no other caller holds it.
    async fn release_gate(&self, key: &str, gate: Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().await;
        drop(gate);
        if let Some(entry) = in_flight.get(key) {
            if Arc::strong_count(entry) == 1 {
                in_flight.remove(key);
            }
        }
    }
}
