//! In-memory catalog for tests and offline development.
use std::{
    collections::HashMap,
    num::NonZeroU32,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    catalog::{
        AbilitySlot, ArtworkSprites, Catalog, FlavorTextEntry, NamedResource, OtherSprites,
        PokemonRecord, SpeciesRecord, Sprites, TypeSlot,
    },
    error::{CatalogError, Result},
};

/// Catalog serving canned records and counting calls.
#[derive(Debug, Default)]
pub struct MockCatalog {
    pokemon: HashMap<String, PokemonRecord>,
    species: HashMap<String, SpeciesRecord>,
    artwork: HashMap<String, Vec<u8>>,
    pokemon_calls: AtomicUsize,
    species_calls: AtomicUsize,
    artwork_calls: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a primary record under its name and numeric id.
    pub fn with_pokemon(mut self, record: PokemonRecord) -> Self {
        self.pokemon.insert(record.id.to_string(), record.clone());
        self.pokemon.insert(record.name.clone(), record);
        self
    }

    pub fn with_species(mut self, url: impl Into<String>, record: SpeciesRecord) -> Self {
        self.species.insert(url.into(), record);
        self
    }

    pub fn with_artwork(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.artwork.insert(url.into(), bytes);
        self
    }

    pub fn pokemon_calls(&self) -> usize {
        self.pokemon_calls.load(Ordering::SeqCst)
    }

    pub fn species_calls(&self) -> usize {
        self.species_calls.load(Ordering::SeqCst)
    }

    pub fn artwork_calls(&self) -> usize {
        self.artwork_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    fn name(&self) -> &str {
        "MockCatalog"
    }

    async fn fetch_pokemon(&self, query: &str) -> Result<PokemonRecord> {
        self.pokemon_calls.fetch_add(1, Ordering::SeqCst);
        self.pokemon
            .get(query)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                query: query.to_string(),
                status: 404,
            })
    }

    async fn fetch_species(&self, url: &str) -> Result<SpeciesRecord> {
        self.species_calls.fetch_add(1, Ordering::SeqCst);
        self.species.get(url).cloned().ok_or(CatalogError::Status {
            url: url.to_string(),
            status: 404,
        })
    }

    async fn fetch_artwork(&self, url: &str) -> Result<Vec<u8>> {
        self.artwork_calls.fetch_add(1, Ordering::SeqCst);
        self.artwork.get(url).cloned().ok_or(CatalogError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// Builder for primary records used by tests.
#[derive(Clone, Debug)]
pub struct PokemonFixture {
    record: PokemonRecord,
}

impl PokemonFixture {
    /// Starts a record with a species URL of `mock://species/{id}`.
    ///
    /// # Panics
    ///
    /// Panics when `id` is zero.
    pub fn new(id: u32, name: &str) -> Self {
        let id = NonZeroU32::new(id).expect("fixture ids are positive");
        Self {
            record: PokemonRecord {
                id,
                name: name.to_string(),
                species: NamedResource::new(name, species_url(id.get())),
                sprites: Sprites::default(),
                types: Vec::new(),
                abilities: Vec::new(),
            },
        }
    }

    pub fn artwork(mut self, url: &str) -> Self {
        self.record.sprites = Sprites {
            other: OtherSprites {
                official_artwork: Some(ArtworkSprites {
                    front_default: Some(url.to_string()),
                }),
            },
        };
        self
    }

    pub fn types(mut self, names: &[&str]) -> Self {
        self.record.types = names
            .iter()
            .map(|name| TypeSlot {
                kind: NamedResource::new(*name, ""),
            })
            .collect();
        self
    }

    pub fn ability(mut self, name: &str, is_hidden: bool) -> Self {
        self.record.abilities.push(AbilitySlot {
            ability: NamedResource::new(name, ""),
            is_hidden,
        });
        self
    }

    pub fn species_url(&self) -> &str {
        &self.record.species.url
    }

    pub fn build(self) -> PokemonRecord {
        self.record
    }
}

pub fn species_url(id: u32) -> String {
    format!("mock://species/{id}")
}

/// Species record from `(language, text)` pairs.
pub fn species(entries: &[(&str, &str)]) -> SpeciesRecord {
    SpeciesRecord {
        flavor_text_entries: entries
            .iter()
            .map(|(language, text)| FlavorTextEntry {
                flavor_text: text.to_string(),
                language: NamedResource::new(*language, ""),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_records_by_name_and_id() {
        let catalog = MockCatalog::new().with_pokemon(PokemonFixture::new(25, "pikachu").build());

        assert_eq!(catalog.fetch_pokemon("25").await.unwrap().name, "pikachu");
        assert_eq!(catalog.fetch_pokemon("pikachu").await.unwrap().id.get(), 25);
        assert!(matches!(
            catalog.fetch_pokemon("raichu").await,
            Err(CatalogError::NotFound { status: 404, .. })
        ));
        assert_eq!(catalog.pokemon_calls(), 3);
    }
}
