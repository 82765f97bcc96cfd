//! Raw PokeAPI response shapes
//!
//! Serde mirrors of the upstream wire format. Only the fields the service
//! consumes are modeled; everything else upstream sends is ignored during
//! deserialization.

use serde::Deserialize;

// == List Shapes ==
/// One entry of the upstream paginated list. Carries no id field; the id is
/// parsed out of the resource URL.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListItem {
    pub name: String,
    pub url: String,
}

/// Upstream paginated list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemonList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<RawListItem>,
}

// == Detail Shapes ==
/// A `{name, url}` pair nested inside slot entries.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<RawOtherSprites>,
}

/// Slot-ordered type entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: RawNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: RawNamedResource,
    pub is_hidden: bool,
    pub slot: u32,
}

/// Move entry. Version/level-learned metadata upstream attaches to each
/// move is intentionally not modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMoveEntry {
    #[serde(rename = "move")]
    pub move_: RawNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForm {
    pub name: String,
    pub url: String,
}

/// Upstream detail record for a single creature.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemonDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: RawSprites,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    pub moves: Vec<RawMoveEntry>,
    #[serde(default)]
    pub forms: Vec<RawForm>,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_envelope() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]
        }"#;

        let list: RawPokemonList = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, 1302);
        assert!(list.next.is_some());
        assert!(list.previous.is_none());
        assert_eq!(list.results.len(), 1);
        assert_eq!(list.results[0].name, "bulbasaur");
    }

    #[test]
    fn test_deserialize_detail_with_artwork() {
        let json = r#"{
            "id": 1,
            "name": "bulbasaur",
            "sprites": {
                "front_default": "https://example.test/front/1.png",
                "other": {
                    "official-artwork": {
                        "front_default": "https://example.test/artwork/1.png"
                    }
                }
            },
            "types": [{"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}],
            "abilities": [{"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1}],
            "moves": [{"move": {"name": "razor-wind", "url": "https://pokeapi.co/api/v2/move/13/"}}],
            "forms": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-form/1/"}]
        }"#;

        let detail: RawPokemonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, 1);
        assert_eq!(
            detail
                .sprites
                .other
                .unwrap()
                .official_artwork
                .unwrap()
                .front_default
                .unwrap(),
            "https://example.test/artwork/1.png"
        );
        assert_eq!(detail.types[0].type_.name, "grass");
        assert!(!detail.abilities[0].is_hidden);
        assert_eq!(detail.moves[0].move_.name, "razor-wind");
    }

    #[test]
    fn test_deserialize_detail_missing_optional_sections() {
        // Upstream records with absent sprite/collection sections still parse.
        let json = r#"{"id": 99, "name": "missingno"}"#;

        let detail: RawPokemonDetail = serde_json::from_str(json).unwrap();
        assert!(detail.sprites.front_default.is_none());
        assert!(detail.types.is_empty());
        assert!(detail.moves.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{
            "count": 0,
            "next": null,
            "previous": null,
            "results": [],
            "some_future_field": {"nested": true}
        }"#;

        let list: RawPokemonList = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, 0);
    }
}
