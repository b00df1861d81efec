//! Top-level client wiring a catalog to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ LookupService (Catalog + lookup configuration)
//!   └─→ Frontend (UI layer - CLI)
//! ```
//!
//! The catalog is a trait object, so the HTTP client, the in-memory mock,
//! or any other source can be injected through [`ClientBuilder`].

mod builder;

pub use builder::ClientBuilder;

pub use pokedex_core::Frontend;

use anyhow::Result;
use pokedex_core::LookupService;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the catalog, configuration and frontend
/// 2. `Client::run()` hands the lookup service to the frontend (blocking)
/// 3. The frontend returns when the user quits
pub struct Client {
    lookups: LookupService,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn lookups(&self) -> &LookupService {
        &self.lookups
    }

    /// Run the frontend until it exits.
    ///
    /// # Errors
    ///
    /// Returns whatever fatal error the frontend reports. Individual lookup
    /// failures never surface here.
    pub async fn run(self) -> Result<()> {
        let Client {
            lookups,
            mut frontend,
        } = self;

        tracing::info!("Client running");
        frontend.run(lookups).await?;
        tracing::info!("Client stopped");

        Ok(())
    }
}
