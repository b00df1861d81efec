//! Catalog abstraction and the wire records it returns.
//!
//! The records mirror the subset of the PokeAPI JSON documents the lookup
//! reads. Everything on the artwork path is optional so that a record
//! without official artwork still decodes.
use std::num::NonZeroU32;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Read-only access to a remote creature catalog.
///
/// # Implementations
///
/// - `pokeapi::PokeApiClient`: HTTP client for the public PokeAPI
/// - [`crate::mock::MockCatalog`]: canned records for tests
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Human-readable catalog name used in logs.
    fn name(&self) -> &str;

    /// Reads the primary record addressed by name or numeric id.
    ///
    /// A non-success status is reported as [`crate::CatalogError::NotFound`].
    async fn fetch_pokemon(&self, query: &str) -> Result<PokemonRecord>;

    /// Reads the species record at a URL taken from a primary record.
    async fn fetch_species(&self, url: &str) -> Result<SpeciesRecord>;

    /// Downloads raw artwork bytes.
    async fn fetch_artwork(&self, url: &str) -> Result<Vec<u8>>;
}

/// `{ "name": ..., "url": ... }` reference used all over the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Primary record returned by `GET /pokemon/{name-or-id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: NonZeroU32,
    pub name: String,
    pub species: NamedResource,
    #[serde(default)]
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
}

impl PokemonRecord {
    /// Official artwork URL, if the catalog provides one.
    pub fn official_artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|artwork| artwork.front_default.as_deref())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Secondary record returned by the species URL.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

/// One localized description line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_record_without_artwork() {
        let body = r#"{
            "id": 132,
            "name": "ditto",
            "species": { "name": "ditto", "url": "https://pokeapi.co/api/v2/pokemon-species/132/" },
            "sprites": { "front_default": null, "other": {} },
            "types": [ { "slot": 1, "type": { "name": "normal", "url": "u" } } ],
            "abilities": [ { "ability": { "name": "limber", "url": "u" }, "is_hidden": false, "slot": 1 } ]
        }"#;

        let record: PokemonRecord = serde_json::from_str(body).expect("record should decode");
        assert_eq!(record.id.get(), 132);
        assert_eq!(record.official_artwork(), None);
    }

    #[test]
    fn decodes_official_artwork_path() {
        let body = r#"{
            "id": 25,
            "name": "pikachu",
            "species": { "name": "pikachu", "url": "s" },
            "sprites": { "other": { "official-artwork": { "front_default": "https://img/25.png", "front_shiny": "x" } } },
            "types": [],
            "abilities": []
        }"#;

        let record: PokemonRecord = serde_json::from_str(body).expect("record should decode");
        assert_eq!(record.official_artwork(), Some("https://img/25.png"));
    }

    #[test]
    fn rejects_zero_id() {
        let body = r#"{
            "id": 0,
            "name": "nothing",
            "species": { "name": "nothing", "url": "s" },
            "types": [],
            "abilities": []
        }"#;

        assert!(serde_json::from_str::<PokemonRecord>(body).is_err());
    }

    #[test]
    fn species_requires_flavor_entries() {
        assert!(serde_json::from_str::<SpeciesRecord>("{}").is_err());
    }
}
