//! PokéAPI Client
//!
//! Cached fetchers for the upstream resources, plus an uncached
//! characteristic pass-through. Each cached fetch resolves through the
//! cache-aside policy under a resource-namespaced key; missing upstream
//! resources surface as NotFound and are never written to the store.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::{CacheAside, CacheStats, CacheStore};
use crate::error::{Error, Result};
use crate::models::upstream::{Characteristic, EvolutionChain, Pokemon, PokemonSpecies};
use crate::pokeapi::Transport;

// == PokéAPI Client ==
/// Composed client over an injected cache store and transport.
pub struct PokeApiClient {
    cache: CacheAside,
    transport: Arc<dyn Transport>,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client caching into `store` and fetching via `transport`.
    pub fn new(
        store: Arc<dyn CacheStore>,
        transport: Arc<dyn Transport>,
        log_cache_hits: bool,
    ) -> Self {
        Self {
            cache: CacheAside::new(store, log_cache_hits),
            transport,
        }
    }

    // == Cached Fetchers ==
    /// Fetches a Pokémon by numeric id or name (key `pokemon:<id>`).
    pub async fn pokemon(&self, identifier: &str) -> Result<Pokemon> {
        let identifier = identifier.to_lowercase();
        self.fetch_cached("pokemon", &identifier).await
    }

    /// Convenience wrapper over [`Self::pokemon`] for numeric ids.
    pub async fn pokemon_by_id(&self, id: u32) -> Result<Pokemon> {
        self.fetch_cached("pokemon", &id.to_string()).await
    }

    /// Fetches a species by numeric id or name (key `pokemon-species:<id>`).
    pub async fn species(&self, identifier: &str) -> Result<PokemonSpecies> {
        let identifier = identifier.to_lowercase();
        self.fetch_cached("pokemon-species", &identifier).await
    }

    /// Convenience wrapper over [`Self::species`] for numeric ids.
    pub async fn species_by_id(&self, id: u32) -> Result<PokemonSpecies> {
        self.fetch_cached("pokemon-species", &id.to_string()).await
    }

    /// Fetches an evolution chain by id (key `evolution-chain:<id>`).
    pub async fn evolution_chain(&self, id: u32) -> Result<EvolutionChain> {
        self.fetch_cached("evolution-chain", &id.to_string()).await
    }

    // == Characteristic Pass-Through ==
    /// Fetches a characteristic straight from the upstream, bypassing the
    /// cache entirely.
    pub async fn characteristic(&self, id: u32) -> Result<Characteristic> {
        let path = format!("characteristic/{}", id);
        let body = self
            .transport
            .get(&path)
            .await?
            .ok_or_else(|| Error::not_found("characteristic", id.to_string()))?;

        serde_json::from_value(body)
            .map_err(|err| Error::Malformed(format!("characteristic {}: {}", id, err)))
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Resolves `<resource>:<identifier>` through the cache, fetching
    /// `<resource>/<identifier>` upstream on miss.
    async fn fetch_cached<T>(&self, resource: &'static str, identifier: &str) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let key = format!("{}:{}", resource, identifier);
        let path = format!("{}/{}", resource, identifier);
        let transport = Arc::clone(&self.transport);
        let identifier = identifier.to_string();

        self.cache
            .resolve(&key, move || async move {
                let body = transport
                    .get(&path)
                    .await?
                    .ok_or_else(|| Error::not_found(resource, identifier.clone()))?;

                serde_json::from_value(body).map_err(|err| {
                    Error::Malformed(format!("{} {}: {}", resource, identifier, err))
                })
            })
            .await
    }
}
