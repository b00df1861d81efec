//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use pokedex_core::{Catalog, LookupConfig, LookupService};

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Catalog and frontend are required; the lookup configuration falls back
/// to [`LookupConfig::default`].
#[derive(Default)]
pub struct ClientBuilder {
    catalog: Option<Arc<dyn Catalog>>,
    config: Option<LookupConfig>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog (required).
    pub fn catalog(mut self, catalog: impl Catalog + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Set an already shared catalog (required unless [`Self::catalog`] is used).
    pub fn shared_catalog(mut self, catalog: Arc<dyn Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn config(mut self, config: LookupConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let catalog = self
            .catalog
            .context("Catalog is required. Use .catalog() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        let config = self.config.unwrap_or_default();
        tracing::debug!(
            "Client using catalog {} (language: {}, commit policy: {})",
            catalog.name(),
            config.language,
            config.commit_policy
        );

        Ok(Client {
            lookups: LookupService::new(catalog, config),
            frontend,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    use async_trait::async_trait;
    use pokedex_core::{
        CommitPolicy,
        mock::{MockCatalog, PokemonFixture, species},
    };

    use super::*;

    /// Frontend that performs one lookup and records whether it succeeded.
    struct ScriptedFrontend {
        query: &'static str,
        found: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, lookups: LookupService) -> Result<()> {
            let found = lookups.lookup(self.query).await.is_some();
            self.found.store(found, Ordering::SeqCst);
            Ok(())
        }
    }

    fn catalog() -> MockCatalog {
        let bulbasaur = PokemonFixture::new(1, "bulbasaur").types(&["grass", "poison"]);
        let species_url = bulbasaur.species_url().to_string();
        MockCatalog::new()
            .with_pokemon(bulbasaur.build())
            .with_species(species_url, species(&[("en", "A strange seed.")]))
    }

    #[test]
    fn build_requires_catalog_and_frontend() {
        let found = Arc::new(AtomicBool::new(false));

        let err = ClientBuilder::new()
            .frontend(ScriptedFrontend {
                query: "bulbasaur",
                found: found.clone(),
            })
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Catalog is required"));

        let err = ClientBuilder::new().catalog(catalog()).build().err().unwrap();
        assert!(err.to_string().contains("Frontend is required"));
    }

    #[test]
    fn config_defaults_when_unset() {
        let client = Client::builder()
            .catalog(catalog())
            .frontend(ScriptedFrontend {
                query: "bulbasaur",
                found: Arc::new(AtomicBool::new(false)),
            })
            .build()
            .unwrap();

        assert_eq!(client.lookups().config().language, "en");
        assert_eq!(
            client.lookups().config().commit_policy,
            CommitPolicy::LastCompleted
        );
    }

    #[tokio::test]
    async fn run_hands_lookups_to_frontend() {
        let found = Arc::new(AtomicBool::new(false));

        Client::builder()
            .catalog(catalog())
            .config(LookupConfig {
                commit_policy: CommitPolicy::LatestIssued,
                ..LookupConfig::default()
            })
            .frontend(ScriptedFrontend {
                query: "bulbasaur",
                found: found.clone(),
            })
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        assert!(found.load(Ordering::SeqCst));
    }
}
