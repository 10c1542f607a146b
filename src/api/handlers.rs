//! API Handlers
//!
//! HTTP request handlers for the catalog service endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;

use crate::cache::{CacheStore, MemoryStore, RedisStore};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{
    CatalogEntry, Characteristic, HealthResponse, PokemonDetail, StatsResponse,
};
use crate::pokeapi::{HttpTransport, PokeApiClient, Transport};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached upstream client
    pub client: Arc<PokeApiClient>,
    /// Memoized catalog snapshot
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates an AppState from configuration, connecting the cache store.
    ///
    /// An unreachable Redis downgrades to the in-memory store instead of
    /// failing startup; the service then runs uncached across restarts.
    pub async fn from_config(config: &Config) -> Self {
        let store: Arc<dyn CacheStore> = match RedisStore::connect(&config.redis_url).await {
            Ok(store) => Arc::new(store),
            Err(err) => {
                warn!(
                    "Redis unavailable ({}), falling back to in-memory store",
                    err
                );
                Arc::new(MemoryStore::new())
            }
        };
        let transport = Arc::new(HttpTransport::new(config.api_base_url.clone()));

        Self::from_parts(store, transport, config)
    }

    /// Wires the client and catalog from explicit store and transport.
    pub fn from_parts(
        store: Arc<dyn CacheStore>,
        transport: Arc<dyn Transport>,
        config: &Config,
    ) -> Self {
        let client = Arc::new(PokeApiClient::new(store, transport, config.log_cache_hits));
        let catalog = Arc::new(Catalog::new(
            client.clone(),
            config.catalog_max_id,
            config.flavor_language.clone(),
        ));

        Self { client, catalog }
    }
}

/// Handler for GET /pokemon
///
/// Returns the full catalog, building the snapshot on first request.
pub async fn list_pokemon_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogEntry>>> {
    let entries = state.catalog.entries().await?;
    Ok(Json(entries))
}

/// Handler for GET /pokemon/:identifier
///
/// A numeric identifier is looked up as an id; anything else is
/// slug-normalized and looked up as a name.
pub async fn get_pokemon_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<PokemonDetail>> {
    if let Ok(id) = identifier.parse::<u32>() {
        if id == 0 {
            return Err(Error::InvalidRequest("id must be positive".to_string()));
        }
        return Ok(Json(state.catalog.detail(id).await?));
    }

    let slug = slugify(&identifier);
    if slug.is_empty() {
        return Err(Error::InvalidRequest(format!(
            "invalid name: {}",
            identifier
        )));
    }

    Ok(Json(state.catalog.detail_by_name(&slug).await?))
}

/// Handler for GET /characteristic/:id
///
/// Uncached pass-through to the upstream characteristic resource.
pub async fn characteristic_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Characteristic>> {
    if id == 0 {
        return Err(Error::InvalidRequest("id must be positive".to_string()));
    }

    Ok(Json(state.client.characteristic(id).await?))
}

/// Handler for GET /stats
///
/// Returns cache effectiveness counters and catalog readiness.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.client.cache_stats(),
        state.catalog.is_ready(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Name Normalization ==
/// Normalizes a display name into the upstream's slug form: trimmed,
/// lowercased, common accents folded, separator runs collapsed to single
/// hyphens, all other punctuation dropped.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.trim().to_lowercase().chars() {
        let folded = match ch {
            'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        };

        if folded.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(folded);
        } else if folded.is_whitespace() || folded == '-' || folded == '_' {
            pending_hyphen = true;
        }
    }

    slug
}
