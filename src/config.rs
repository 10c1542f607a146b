//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL for the cache store
    pub redis_url: String,
    /// Base URL of the upstream PokéAPI
    pub api_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Whether cache hits are logged (misses always are)
    pub log_cache_hits: bool,
    /// Highest Pokémon id included in the catalog snapshot
    pub catalog_max_id: u32,
    /// Language code used when selecting flavor-text descriptions
    pub flavor_language: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Cache store connection URL (default: redis://127.0.0.1:6379)
    /// - `POKEAPI_URL` - Upstream API base URL (default: https://pokeapi.co/api/v2)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_LOG_HITS` - Set to "1" or "true" to log cache hits (default: off)
    /// - `CATALOG_MAX_ID` - Upper bound of the catalog id range (default: 1010)
    /// - `FLAVOR_LANGUAGE` - Flavor-text language code (default: en)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            api_base_url: env::var("POKEAPI_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            log_cache_hits: env::var("CACHE_LOG_HITS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            catalog_max_id: env::var("CATALOG_MAX_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1010),
            flavor_language: env::var("FLAVOR_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            server_port: 3000,
            log_cache_hits: false,
            catalog_max_id: 1010,
            flavor_language: "en".to_string(),
        }
    }
}
