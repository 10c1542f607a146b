//! Cache Module
//!
//! Cache-aside layer over a pluggable key-value store. Payloads are
//! serialized JSON strings with no expiration; the policy populates the
//! store on miss and coalesces concurrent lookups per key.

mod memory;
mod policy;
mod redis;
mod stats;
mod store;


// Re-export public types
pub use memory::MemoryStore;
pub use policy::CacheAside;
pub use redis::RedisStore;
pub use stats::CacheStats;
pub use store::CacheStore;
