//! Upstream API models
//!
//! Typed mirrors of the PokéAPI payloads this service consumes. Only the
//! fields the service actually reads are modeled; everything else the
//! upstream sends is dropped on deserialization. Cached payloads are the
//! serialized form of these types, so modeled fields round-trip losslessly.

use serde::{Deserialize, Serialize};

// == Shared Shapes ==

/// A named API resource reference ({ name, url }).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare API resource reference ({ url }).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

// == Pokemon ==

/// Payload of `/pokemon/{id-or-name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Missing for some species in the upstream data
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// Sprite URLs for a Pokémon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

/// One entry of a Pokémon's `stats` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One entry of a Pokémon's `types` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

// == Pokemon Species ==

/// Payload of `/pokemon-species/{id-or-name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub generation: NamedResource,
    /// Absent for species with no recorded chain
    pub evolution_chain: Option<ResourceRef>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// One localized flavor-text entry of a species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

// == Evolution Chain ==

/// Payload of `/evolution-chain/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the evolution chain tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

// == Characteristic ==

/// Payload of `/characteristic/{id}`, served uncached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: u32,
    pub gene_modulo: u32,
    #[serde(default)]
    pub possible_values: Vec<u32>,
    pub highest_stat: NamedResource,
    #[serde(default)]
    pub descriptions: Vec<CharacteristicDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicDescription {
    pub description: String,
    pub language: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "is_default": true,
            "sprites": {
                "front_default": "https://img.example/25.png",
                "back_default": null,
                "other": {
                    "official-artwork": { "front_default": "https://img.example/art/25.png" }
                }
            },
            "stats": [
                { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://api.example/stat/1/" } }
            ],
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://api.example/type/13/" } }
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.types[0].type_ref.name, "electric");
        assert_eq!(pokemon.stats[0].base_stat, 35);
        assert_eq!(
            pokemon.sprites.other.official_artwork.front_default.as_deref(),
            Some("https://img.example/art/25.png")
        );
    }

    #[test]
    fn test_pokemon_minimal_sprites() {
        // Null artwork and missing "other" block must not fail decoding
        let json = r#"{
            "id": 999,
            "name": "testmon",
            "base_experience": null,
            "height": 1,
            "weight": 1,
            "sprites": { "front_default": null }
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.base_experience, None);
        assert!(pokemon.sprites.front_default.is_none());
        assert!(pokemon.sprites.other.official_artwork.front_default.is_none());
        assert!(pokemon.stats.is_empty());
    }

    #[test]
    fn test_species_deserialize() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "generation": { "name": "generation-i", "url": "https://api.example/generation/1/" },
            "evolution_chain": { "url": "https://api.example/evolution-chain/10/" },
            "flavor_text_entries": [
                {
                    "flavor_text": "When several of\nthese POKéMON\fgather...",
                    "language": { "name": "en", "url": "https://api.example/language/9/" },
                    "version": { "name": "red", "url": "https://api.example/version/1/" }
                }
            ]
        }"#;

        let species: PokemonSpecies = serde_json::from_str(json).unwrap();
        assert_eq!(species.generation.name, "generation-i");
        assert_eq!(
            species.evolution_chain.as_ref().unwrap().url,
            "https://api.example/evolution-chain/10/"
        );
        assert_eq!(species.flavor_text_entries[0].language.name, "en");
    }

    #[test]
    fn test_evolution_chain_deserialize() {
        let json = r#"{
            "id": 10,
            "chain": {
                "species": { "name": "pichu", "url": "https://api.example/pokemon-species/172/" },
                "evolves_to": [
                    {
                        "species": { "name": "pikachu", "url": "https://api.example/pokemon-species/25/" },
                        "evolves_to": [
                            {
                                "species": { "name": "raichu", "url": "https://api.example/pokemon-species/26/" },
                                "evolves_to": []
                            }
                        ]
                    }
                ]
            }
        }"#;

        let chain: EvolutionChain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.chain.species.name, "pichu");
        assert_eq!(chain.chain.evolves_to[0].species.name, "pikachu");
        assert_eq!(
            chain.chain.evolves_to[0].evolves_to[0].species.name,
            "raichu"
        );
    }

    #[test]
    fn test_cached_payload_roundtrip() {
        let json = r#"{
            "id": 1,
            "name": "bulbasaur",
            "base_experience": 64,
            "height": 7,
            "weight": 69,
            "sprites": {
                "front_default": "https://img.example/1.png",
                "other": { "official-artwork": { "front_default": "https://img.example/art/1.png" } }
            },
            "stats": [],
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://api.example/type/12/" } }
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        let stored = serde_json::to_string(&pokemon).unwrap();
        let reloaded: Pokemon = serde_json::from_str(&stored).unwrap();
        assert_eq!(pokemon, reloaded);
        // The rename survives re-serialization
        assert!(stored.contains("official-artwork"));
    }

    #[test]
    fn test_characteristic_deserialize() {
        let json = r#"{
            "id": 1,
            "gene_modulo": 0,
            "possible_values": [0, 5, 10, 15, 20, 25, 30],
            "highest_stat": { "name": "hp", "url": "https://api.example/stat/1/" },
            "descriptions": [
                { "description": "Loves to eat", "language": { "name": "en", "url": "https://api.example/language/9/" } }
            ]
        }"#;

        let characteristic: Characteristic = serde_json::from_str(json).unwrap();
        assert_eq!(characteristic.gene_modulo, 0);
        assert_eq!(characteristic.possible_values.len(), 7);
        assert_eq!(characteristic.highest_stat.name, "hp");
    }
}
