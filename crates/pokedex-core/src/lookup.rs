//! Fetch/normalize routine.
//!
//! Two strictly sequential catalog reads (primary record, then the species
//! record it points at) followed by a pure reshaping step into
//! [`LookupResult`].
use std::sync::Arc;

use crate::{
    catalog::{Catalog, FlavorTextEntry, PokemonRecord, SpeciesRecord},
    config::LookupConfig,
    error::{CatalogError, LookupError},
    view_model::{Ability, LookupResult},
};

/// Description used when no entry matches the configured language.
pub const NO_DESCRIPTION: &str = "No description available.";

const FORM_FEED: char = '\u{000C}';

/// Runs the two reads and normalizes them.
pub async fn fetch_lookup<C>(
    catalog: &C,
    query: &str,
    language: &str,
) -> Result<LookupResult, LookupError>
where
    C: Catalog + ?Sized,
{
    tracing::debug!("Looking up `{}` in {}", query, catalog.name());

    let pokemon = catalog
        .fetch_pokemon(query)
        .await
        .map_err(|e| LookupError::failed(query, e))?;

    let species = catalog
        .fetch_species(&pokemon.species.url)
        .await
        .map_err(|e| LookupError::failed(query, e))?;

    Ok(normalize(&pokemon, &species, language))
}

/// Reshapes the catalog records into the flat view-model.
pub fn normalize(pokemon: &PokemonRecord, species: &SpeciesRecord, language: &str) -> LookupResult {
    LookupResult {
        name: pokemon.name.clone(),
        numeric_id: pokemon.id.get(),
        image_url: pokemon.official_artwork().map(str::to_owned),
        categories: pokemon
            .types
            .iter()
            .map(|slot| slot.kind.name.clone())
            .collect(),
        description: select_description(&species.flavor_text_entries, language),
        abilities: pokemon
            .abilities
            .iter()
            .map(|slot| Ability {
                name: slot.ability.name.clone(),
                is_hidden: slot.is_hidden,
            })
            .collect(),
    }
}

/// First entry in `language`, form-feeds normalized, or [`NO_DESCRIPTION`].
pub fn select_description(entries: &[FlavorTextEntry], language: &str) -> String {
    entries
        .iter()
        .find(|entry| entry.language.name == language)
        .map(|entry| normalize_flavor_text(&entry.flavor_text))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

pub fn normalize_flavor_text(text: &str) -> String {
    text.replace(FORM_FEED, " ")
}

/// Cloneable handle that frontends use to run lookups.
///
/// Failures are logged here and reported to callers as `None`, so the
/// presentation layer never sees anything but "result" or "no result".
#[derive(Clone)]
pub struct LookupService {
    catalog: Arc<dyn Catalog>,
    config: LookupConfig,
}

impl LookupService {
    pub fn new(catalog: Arc<dyn Catalog>, config: LookupConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    pub async fn try_lookup(&self, query: &str) -> Result<LookupResult, LookupError> {
        fetch_lookup(self.catalog.as_ref(), query, &self.config.language).await
    }

    /// Looks `query` up, logging and swallowing any failure.
    pub async fn lookup(&self, query: &str) -> Option<LookupResult> {
        match self.try_lookup(query).await {
            Ok(result) => {
                tracing::info!("Loaded #{} {}", result.numeric_id, result.name);
                Some(result)
            }
            Err(e) => {
                tracing::warn!("{}", e.chain());
                None
            }
        }
    }

    /// Downloads artwork bytes for the image panel.
    pub async fn artwork(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        self.catalog.fetch_artwork(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NamedResource;

    fn entry(language: &str, text: &str) -> FlavorTextEntry {
        FlavorTextEntry {
            flavor_text: text.to_string(),
            language: NamedResource::new(language, ""),
        }
    }

    #[test]
    fn picks_first_matching_language() {
        let entries = vec![
            entry("ja", "ほっぺたの"),
            entry("en", "When several of\u{000C}these POKéMON gather"),
            entry("en", "second english entry"),
        ];

        assert_eq!(
            select_description(&entries, "en"),
            "When several of these POKéMON gather"
        );
    }

    #[test]
    fn falls_back_to_placeholder() {
        let entries = vec![entry("fr", "Lorsque"), entry("de", "Wenn")];
        assert_eq!(select_description(&entries, "en"), NO_DESCRIPTION);
        assert_eq!(select_description(&[], "en"), NO_DESCRIPTION);
    }

    #[test]
    fn every_form_feed_becomes_one_space() {
        assert_eq!(normalize_flavor_text("a\u{000C}\u{000C}b\nc"), "a  b\nc");
    }
}
