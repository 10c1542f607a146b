//! Catalog Module
//!
//! Derivation helpers, the memoized snapshot builder, and per-entity
//! detail assembly over the cached resource fetchers.

mod detail;
pub mod extract;
mod snapshot;

#[cfg(test)]
mod property_tests;

pub use snapshot::Catalog;
