//! PokeAPI catalog implementation.
//!
//! Implements [`pokedex_core::Catalog`] over the public, unauthenticated
//! PokeAPI v2 HTTP endpoints:
//!
//! - `GET {base}/pokemon/{name-or-id}` for the primary record
//! - `GET {species.url}` for the species record
//! - `GET {artwork url}` for the official artwork image

mod client;
mod config;
mod error;

pub use client::PokeApiClient;
pub use config::{DEFAULT_API_BASE, PokeApiConfig};
pub use error::PokeApiError;
