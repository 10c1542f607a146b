//! Pokédex Catalog Service
//!
//! A read-only catalog over the PokéAPI with a cache-aside layer: every
//! resource fetch resolves through a Redis-backed store, and the full
//! catalog is memoized process-wide after its first successful build.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;

pub use api::AppState;
pub use config::Config;
pub use error::{Error, Result};
