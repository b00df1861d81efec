//! PokeAPI HTTP client implementation.

use anyhow::anyhow;
use async_trait::async_trait;
use pokedex_core::{
    Catalog, CatalogError, PokemonRecord, SpeciesRecord, error::Result as CatalogResult,
};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{config::PokeApiConfig, error::PokeApiError};

/// Catalog client for the public PokeAPI.
///
/// Requests carry no headers beyond the user agent and no body.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    /// Parsed base endpoint
    base_url: Url,

    /// HTTP client
    http_client: reqwest::Client,
}

impl PokeApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(config: PokeApiConfig) -> Result<Self, PokeApiError> {
        let base_url =
            Url::parse(&config.api_base).map_err(|e| PokeApiError::InvalidBaseUrl {
                url: config.api_base.clone(),
                message: e.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(PokeApiError::CannotBeABase(base_url.to_string()));
        }

        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Client for the public endpoint with default settings.
    pub fn public() -> Result<Self, PokeApiError> {
        Self::new(PokeApiConfig::default())
    }

    /// `{base}/pokemon/{query}` with the query percent-encoded as one path
    /// segment.
    pub fn pokemon_url(&self, query: &str) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("PokeAPI base URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .push("pokemon")
            .push(query);
        Ok(url)
    }

    async fn get(&self, url: Url) -> CatalogResult<(StatusCode, reqwest::Response)> {
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("GET {url}: {e}")))?;

        Ok((response.status(), response))
    }

    async fn read_body(url: &Url, response: reqwest::Response) -> CatalogResult<String> {
        response
            .text()
            .await
            .map_err(|e| CatalogError::Network(format!("failed to read body of {url}: {e}")))
    }

    fn decode_json_from_body<T: DeserializeOwned>(what: &str, body: &str) -> CatalogResult<T> {
        serde_json::from_str::<T>(body).map_err(|e| CatalogError::decode(what, e))
    }
}

#[async_trait]
impl Catalog for PokeApiClient {
    fn name(&self) -> &str {
        "PokeAPI"
    }

    async fn fetch_pokemon(&self, query: &str) -> CatalogResult<PokemonRecord> {
        let url = self.pokemon_url(query)?;
        let (status, response) = self.get(url.clone()).await?;
        if !status.is_success() {
            return Err(CatalogError::NotFound {
                query: query.to_string(),
                status: status.as_u16(),
            });
        }

        let body = Self::read_body(&url, response).await?;
        Self::decode_json_from_body("pokemon record", &body)
    }

    async fn fetch_species(&self, url: &str) -> CatalogResult<SpeciesRecord> {
        let url = Url::parse(url).map_err(|e| CatalogError::decode("species url", e))?;
        let (status, response) = self.get(url.clone()).await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = Self::read_body(&url, response).await?;
        Self::decode_json_from_body("species record", &body)
    }

    async fn fetch_artwork(&self, url: &str) -> CatalogResult<Vec<u8>> {
        let url = Url::parse(url).map_err(|e| CatalogError::decode("artwork url", e))?;
        let (status, response) = self.get(url.clone()).await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(format!("failed to read artwork {url}: {e}")))?;

        tracing::debug!("Downloaded {} bytes of artwork from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PokeApiClient {
        PokeApiClient::new(PokeApiConfig {
            api_base: base.to_string(),
            ..PokeApiConfig::default()
        })
        .expect("client should build")
    }

    #[test]
    fn builds_pokemon_url() {
        let url = client("https://pokeapi.co/api/v2")
            .pokemon_url("pikachu")
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/pikachu");
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let url = client("https://pokeapi.co/api/v2/").pokemon_url("25").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/25");
    }

    #[test]
    fn query_is_one_encoded_segment() {
        let url = client("https://pokeapi.co/api/v2")
            .pokemon_url("mr mime/x")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://pokeapi.co/api/v2/pokemon/mr%20mime%2Fx"
        );
    }

    #[test]
    fn rejects_invalid_base() {
        let err = PokeApiClient::new(PokeApiConfig {
            api_base: "not a url".into(),
            ..PokeApiConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, PokeApiError::InvalidBaseUrl { .. }));

        let err = PokeApiClient::new(PokeApiConfig {
            api_base: "mailto:trainer@example.com".into(),
            ..PokeApiConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, PokeApiError::CannotBeABase(_)));
    }

    #[test]
    fn decode_error_names_the_document() {
        let err = PokeApiClient::decode_json_from_body::<SpeciesRecord>("species record", "<html>")
            .expect_err("html should not decode");
        assert!(err.to_string().contains("species record"));
    }

    #[test]
    fn decodes_real_species_shape() {
        let body = r#"{
            "id": 25,
            "name": "pikachu",
            "flavor_text_entries": [
                {
                    "flavor_text": "When several of\fthese POKéMON gather,",
                    "language": { "name": "en", "url": "https://pokeapi.co/api/v2/language/9/" },
                    "version": { "name": "red", "url": "https://pokeapi.co/api/v2/version/1/" }
                }
            ]
        }"#;

        let species: SpeciesRecord =
            PokeApiClient::decode_json_from_body("species record", body).unwrap();
        assert_eq!(species.flavor_text_entries.len(), 1);
        assert!(species.flavor_text_entries[0].flavor_text.contains('\u{000C}'));
    }
}
