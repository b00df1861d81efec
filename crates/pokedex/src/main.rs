//! Pokedex client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Catalog (PokeAPI over HTTP)
//! 2. Frontend (UI) - CLI
//!
//! Both are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! POKEDEX_COMMIT_POLICY=latest-issued RUST_LOG=debug cargo run -p pokedex
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use pokeapi::{PokeApiClient, PokeApiConfig};
    use pokedex::Client;
    use pokedex_cli::{CliConfig, CliFrontend, logging};
    use pokedex_core::LookupConfig;

    // 1. CLI configuration first: it names the log directory
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    // Loaded after logging so invalid values are reported in the log file
    let lookup_config = LookupConfig::from_env();
    let api_config = PokeApiConfig::from_env();

    tracing::info!("Starting Pokedex");
    tracing::info!("API base: {}", api_config.api_base);
    tracing::info!("Description language: {}", lookup_config.language);

    // 3. Build Catalog (independent layer)
    let catalog = PokeApiClient::new(api_config)?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(cli_config);

    // 5. Build and run
    let client = Client::builder()
        .catalog(catalog)
        .config(lookup_config)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Pokedex shutdown complete");
    Ok(())
}
