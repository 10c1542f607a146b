//! Per-Entity Detail Assembly
//!
//! Joins one Pokémon with its species and full evolution chain into the
//! detail view. Runs on demand per request; only the underlying resource
//! fetches are cached.

use std::collections::BTreeMap;

use crate::catalog::extract;
use crate::error::Result;
use crate::models::responses::PokemonDetail;
use crate::pokeapi::PokeApiClient;

/// Assembles the detail view for the Pokémon with this id.
pub(crate) async fn assemble(
    client: &PokeApiClient,
    id: u32,
    language: &str,
) -> Result<PokemonDetail> {
    let (pokemon, species) =
        tokio::try_join!(client.pokemon_by_id(id), client.species_by_id(id))?;

    let chain_id = extract::chain_id(&species)?;
    let chain = client.evolution_chain(chain_id).await?;
    let evolutions = extract::evolution_steps(&chain.chain)?;

    let stats: BTreeMap<String, u32> = pokemon
        .stats
        .iter()
        .map(|slot| (slot.stat.name.clone(), slot.base_stat))
        .collect();

    Ok(PokemonDetail {
        id: pokemon.id,
        name: pokemon.name.clone(),
        description: extract::description(&species.flavor_text_entries, language),
        generation: extract::generation_number(&species.generation.name),
        types: pokemon
            .types
            .iter()
            .map(|slot| slot.type_ref.name.clone())
            .collect(),
        evolutions,
        stats,
        base_experience: pokemon.base_experience.unwrap_or(0),
        height: pokemon.height,
        weight: pokemon.weight,
        image: extract::image_url(&pokemon),
    })
}

/// Resolves a Pokémon by name, then assembles its detail view by id.
pub(crate) async fn assemble_by_name(
    client: &PokeApiClient,
    name: &str,
    language: &str,
) -> Result<PokemonDetail> {
    let pokemon = client.pokemon(name).await?;
    assemble(client, pokemon.id, language).await
}
