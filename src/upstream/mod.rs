//! Upstream Module
//!
//! Client and wire types for the external PokeAPI catalog source.

mod client;
mod types;

// Re-export public types
pub use client::{PokeApiClient, PokemonSource};
pub use types::{
    RawAbilitySlot, RawArtwork, RawForm, RawListItem, RawMoveEntry, RawNamedResource,
    RawOtherSprites, RawPokemonDetail, RawPokemonList, RawSprites, RawTypeSlot,
};
