//! Data models for the catalog service
//!
//! `upstream` mirrors the PokéAPI payloads this service consumes;
//! `responses` defines the DTOs serialized into HTTP response bodies.

pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use responses::{CatalogEntry, EvolutionStep, HealthResponse, PokemonDetail, StatsResponse};
pub use upstream::{
    ChainLink, Characteristic, EvolutionChain, FlavorText, NamedResource, Pokemon, PokemonSpecies,
    Sprites,
};
