//! Derivation Helpers
//!
//! Pure functions deriving catalog fields from upstream payloads:
//! generation numbers, resource ids, evolution lineages, descriptions,
//! and artwork selection.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::responses::EvolutionStep;
use crate::models::upstream::{ChainLink, FlavorText, Pokemon, PokemonSpecies};

/// Fallback description when no flavor text matches the language.
pub const NO_DESCRIPTION: &str = "No description available.";

// == Generation ==
/// Maps an upstream generation name (`generation-iv`) to its number.
///
/// Unknown or unprefixed names map to 0.
pub fn generation_number(name: &str) -> u32 {
    match name.strip_prefix("generation-") {
        Some("i") => 1,
        Some("ii") => 2,
        Some("iii") => 3,
        Some("iv") => 4,
        Some("v") => 5,
        Some("vi") => 6,
        Some("vii") => 7,
        Some("viii") => 8,
        Some("ix") => 9,
        _ => 0,
    }
}

// == Resource URLs ==
/// Extracts the trailing numeric path segment of an API resource URL.
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Returns the id of the evolution chain a species points at.
pub fn chain_id(species: &PokemonSpecies) -> Result<u32> {
    let reference = species.evolution_chain.as_ref().ok_or_else(|| {
        Error::Malformed(format!("species {} has no evolution chain", species.name))
    })?;

    id_from_url(&reference.url).ok_or_else(|| {
        Error::Malformed(format!(
            "unparsable evolution chain url: {}",
            reference.url
        ))
    })
}

// == Lineage ==
/// Collects species names along the first evolution branch, root first.
///
/// Branching chains are truncated to their first branch; a repeated
/// species name ends the walk.
pub fn lineage_names(chain: &ChainLink) -> Vec<String> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    let mut node = Some(chain);

    while let Some(link) = node {
        if !seen.insert(link.species.name.clone()) {
            break;
        }
        names.push(link.species.name.clone());
        node = link.evolves_to.first();
    }

    names
}

/// Like [`lineage_names`], but pairs each stage with the species id taken
/// from its resource URL.
pub fn evolution_steps(chain: &ChainLink) -> Result<Vec<EvolutionStep>> {
    let mut steps = Vec::new();
    let mut seen = HashSet::new();
    let mut node = Some(chain);

    while let Some(link) = node {
        if !seen.insert(link.species.name.clone()) {
            break;
        }
        let id = id_from_url(&link.species.url).ok_or_else(|| {
            Error::Malformed(format!("unparsable species url: {}", link.species.url))
        })?;
        steps.push(EvolutionStep {
            name: link.species.name.clone(),
            id,
        });
        node = link.evolves_to.first();
    }

    Ok(steps)
}

// == Description ==
/// Picks the first flavor text in `language` and normalizes its
/// whitespace, falling back to [`NO_DESCRIPTION`].
pub fn description(entries: &[FlavorText], language: &str) -> String {
    entries
        .iter()
        .find(|entry| entry.language.name == language)
        .map(|entry| clean_flavor_text(&entry.flavor_text))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Collapses form feeds, newlines, and whitespace runs into single
/// spaces and trims the ends.
fn clean_flavor_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// == Artwork ==
/// Official artwork when present, the default sprite otherwise.
pub fn image_url(pokemon: &Pokemon) -> Option<String> {
    pokemon
        .sprites
        .other
        .official_artwork
        .front_default
        .clone()
        .or_else(|| pokemon.sprites.front_default.clone())
}
