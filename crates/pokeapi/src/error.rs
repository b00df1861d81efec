//! Client construction errors.

use thiserror::Error;

/// Errors raised while building a [`crate::PokeApiClient`].
#[derive(Debug, Error)]
pub enum PokeApiError {
    #[error("invalid PokeAPI base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("PokeAPI base URL cannot be a base: {0}")]
    CannotBeABase(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
