//! Redis Store
//!
//! CacheStore implementation over a single multiplexed Redis connection.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::info;

use crate::cache::CacheStore;
use crate::error::Result;

// == Redis Store ==
/// Durable cache store backed by Redis.
///
/// The multiplexed connection is cheap to clone; each operation clones it
/// so concurrent commands interleave on one socket.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connects to Redis at `url` and returns a ready store.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Connected to Redis at {}", url);
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn.get(key).await?;
        Ok(payload)
    }

    async fn set(&self, key: &str, payload: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, payload).await?;
        Ok(())
    }
}
