//! Catalog Snapshot
//!
//! Builds the full catalog over a bounded id range and memoizes it for
//! the process lifetime. A failed build is never memoized; the next
//! request starts over, reusing whatever the cache store already holds.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::catalog::{detail, extract};
use crate::error::Result;
use crate::models::responses::{CatalogEntry, PokemonDetail};
use crate::pokeapi::PokeApiClient;

// == Catalog ==
/// Memoized catalog of entries for ids `1..=max_id`.
///
/// The snapshot cell serializes concurrent first requests into a single
/// build and holds the result until the process exits. Constructing a
/// fresh instance is the only way to reset it.
pub struct Catalog {
    client: Arc<PokeApiClient>,
    max_id: u32,
    language: String,
    snapshot: OnceCell<Vec<CatalogEntry>>,
}

impl Catalog {
    // == Constructor ==
    /// Creates a catalog over `client` covering ids `1..=max_id`, with
    /// descriptions in `language`.
    pub fn new(client: Arc<PokeApiClient>, max_id: u32, language: impl Into<String>) -> Self {
        Self {
            client,
            max_id,
            language: language.into(),
            snapshot: OnceCell::new(),
        }
    }

    // == Entries ==
    /// Returns the catalog, building and memoizing it on first call.
    pub async fn entries(&self) -> Result<Vec<CatalogEntry>> {
        let entries = self.snapshot.get_or_try_init(|| self.build()).await?;
        Ok(entries.clone())
    }

    /// True once a build has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.snapshot.initialized()
    }

    // == Detail ==
    /// Assembles the detail view for one Pokémon id. Not memoized beyond
    /// the cache store.
    pub async fn detail(&self, id: u32) -> Result<PokemonDetail> {
        detail::assemble(&self.client, id, &self.language).await
    }

    /// Resolves a Pokémon by normalized name, then assembles its detail
    /// view by id.
    pub async fn detail_by_name(&self, name: &str) -> Result<PokemonDetail> {
        detail::assemble_by_name(&self.client, name, &self.language).await
    }

    // == Build ==
    async fn build(&self) -> Result<Vec<CatalogEntry>> {
        info!("building catalog snapshot for ids 1..={}", self.max_id);

        // Lineages already walked during this build, keyed by chain id.
        // Scoped to one pass so a retry after failure starts clean.
        let mut lineages: HashMap<u32, Vec<String>> = HashMap::new();
        let mut entries = Vec::with_capacity(self.max_id as usize);

        for id in 1..=self.max_id {
            let entry = self.build_entry(id, &mut lineages).await.map_err(|err| {
                error!("catalog build failed at id {}: {}", id, err);
                err
            })?;
            entries.push(entry);
        }

        entries.sort_by_key(|entry| entry.id);
        info!("catalog snapshot ready: {} entries", entries.len());
        Ok(entries)
    }

    async fn build_entry(
        &self,
        id: u32,
        lineages: &mut HashMap<u32, Vec<String>>,
    ) -> Result<CatalogEntry> {
        let (pokemon, species) = tokio::try_join!(
            self.client.pokemon_by_id(id),
            self.client.species_by_id(id)
        )?;

        let chain_id = extract::chain_id(&species)?;
        let family = match lineages.get(&chain_id) {
            Some(family) => family.clone(),
            None => {
                let chain = self.client.evolution_chain(chain_id).await?;
                let family = extract::lineage_names(&chain.chain);
                lineages.insert(chain_id, family.clone());
                family
            }
        };

        Ok(CatalogEntry {
            id: pokemon.id,
            name: pokemon.name.clone(),
            description: extract::description(&species.flavor_text_entries, &self.language),
            types: pokemon
                .types
                .iter()
                .map(|slot| slot.type_ref.name.clone())
                .collect(),
            generation: extract::generation_number(&species.generation.name),
            family,
            base_experience: pokemon.base_experience.unwrap_or(0),
            height: pokemon.height,
            weight: pokemon.weight,
            image: extract::image_url(&pokemon),
        })
    }
}
