//! PokeAPI client configuration.

use std::env;

/// Public PokeAPI v2 endpoint.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// PokeAPI-specific configuration.
#[derive(Clone, Debug)]
pub struct PokeApiConfig {
    /// Base URL the `/pokemon/{query}` path is appended to.
    pub api_base: String,

    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: format!("pokedex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PokeApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEDEX_API_BASE` - Catalog base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_USER_AGENT` - HTTP user agent (default: pokedex/<version>)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base) = env::var("POKEDEX_API_BASE") {
            let base = base.trim();
            if !base.is_empty() {
                config.api_base = base.to_string();
            }
        }

        if let Ok(agent) = env::var("POKEDEX_USER_AGENT") {
            if !agent.trim().is_empty() {
                config.user_agent = agent;
            }
        }

        config
    }
}
