//! Error types surfaced by catalog access and lookups.
//!
//! Catalog implementations report transport, status and decoding failures
//! through [`CatalogError`]; the lookup routine collapses all of them into
//! the single [`LookupError::LookupFailed`] kind.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures reported by a [`crate::Catalog`] implementation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no entry for `{query}` (status {status})")]
    NotFound { query: String, status: u16 },

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode {what}: {message}")]
    Decode { what: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn decode(what: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            what: what.into(),
            message: message.to_string(),
        }
    }
}

/// The one failure kind a lookup can end in.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup for `{query}` failed")]
    LookupFailed {
        query: String,
        #[source]
        source: CatalogError,
    },
}

impl LookupError {
    pub fn failed(query: impl Into<String>, source: CatalogError) -> Self {
        Self::LookupFailed {
            query: query.into(),
            source,
        }
    }

    /// Renders the error with its full source chain on one line.
    pub fn chain(&self) -> String {
        let mut rendered = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            rendered.push_str(": ");
            rendered.push_str(&cause.to_string());
            source = cause.source();
        }
        rendered
    }
}
