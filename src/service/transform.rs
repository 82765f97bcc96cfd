//! Transformation Rules
//!
//! Pure, deterministic mappings from raw upstream records to the public
//! wire shapes. Edge cases degrade to documented defaults (id 0, null
//! image) instead of failing the request.

use crate::config::ARTWORK_URL_TEMPLATE;
use crate::models::{
    PokemonAbility, PokemonDetail, PokemonForm, PokemonList, PokemonListItem, PokemonMove,
    PokemonType,
};
use crate::upstream::{RawListItem, RawPokemonDetail, RawPokemonList};

// == Id Extraction ==
/// Parses the numeric id out of an upstream resource URL.
///
/// The id is the last purely-numeric path segment, e.g.
/// `https://pokeapi.co/api/v2/pokemon/1/` yields 1. Returns 0 when no such
/// segment exists; a 0 id is indistinguishable downstream from a genuine
/// parse failure, which the artwork link simply dangles on.
pub fn extract_id_from_url(url: &str) -> u32 {
    url.split('/')
        .rev()
        .find(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

// == Artwork URL ==
/// Synthesizes the official-artwork URL for an id.
///
/// Derived algorithmically from a fixed hosting template and never
/// validated against upstream.
pub fn artwork_url(id: u32) -> String {
    format!("{ARTWORK_URL_TEMPLATE}/{id}.png")
}

// == List Transformation ==
/// Maps one upstream list item to the public list shape.
pub fn transform_list_item(item: &RawListItem) -> PokemonListItem {
    let id = extract_id_from_url(&item.url);
    PokemonListItem {
        id,
        name: item.name.clone(),
        image: Some(artwork_url(id)),
    }
}

/// Maps an upstream list envelope to the public envelope, passing the
/// pagination metadata through verbatim.
pub fn transform_list(raw: RawPokemonList) -> PokemonList {
    PokemonList {
        count: raw.count,
        next: raw.next,
        previous: raw.previous,
        results: raw.results.iter().map(transform_list_item).collect(),
    }
}

// == Detail Transformation ==
/// Maps a raw detail record to the public detail shape.
///
/// Image selection is a strict two-level fallback: official artwork, then
/// front-default sprite, then null. No other sprite fields are consulted.
/// Collection orderings are preserved as upstream delivers them
/// (slot-ordered for types and abilities); move version metadata is
/// dropped.
pub fn transform_detail(raw: RawPokemonDetail) -> PokemonDetail {
    let image = raw
        .sprites
        .other
        .and_then(|other| other.official_artwork)
        .and_then(|artwork| artwork.front_default)
        .or(raw.sprites.front_default);

    PokemonDetail {
        id: raw.id,
        name: raw.name,
        image,
        types: raw
            .types
            .into_iter()
            .map(|slot| PokemonType {
                name: slot.type_.name,
            })
            .collect(),
        abilities: raw
            .abilities
            .into_iter()
            .map(|entry| PokemonAbility {
                name: entry.ability.name,
                is_hidden: entry.is_hidden,
            })
            .collect(),
        moves: raw
            .moves
            .into_iter()
            .map(|entry| PokemonMove {
                name: entry.move_.name,
            })
            .collect(),
        forms: raw
            .forms
            .into_iter()
            .map(|form| PokemonForm { name: form.name })
            .collect(),
    }
}
