//! Response DTOs for the catalog service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// One entry of the full catalog listing (GET /pokemon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// National dex id
    pub id: u32,
    pub name: String,
    /// Cleaned flavor text in the configured language
    pub description: String,
    /// Type names in slot order
    pub types: Vec<String>,
    /// Generation number, 0 when the upstream name is unmapped
    pub generation: u32,
    /// Species names of the evolutionary line, oldest first
    pub family: Vec<String>,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
}

/// Full detail view of a single Pokémon (GET /pokemon/:identifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub generation: u32,
    pub types: Vec<String>,
    /// Every stage of the evolution chain, in order
    pub evolutions: Vec<EvolutionStep>,
    /// Base stat values keyed by stat name
    pub stats: BTreeMap<String, u32>,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
}

/// One stage of an evolution chain, with its species id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStep {
    pub name: String,
    pub id: u32,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Whether the catalog snapshot has been built
    pub catalog_ready: bool,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a counter snapshot and catalog state.
    pub fn new(stats: CacheStats, catalog_ready: bool) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
            catalog_ready,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
