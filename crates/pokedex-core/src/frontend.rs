//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::lookup::LookupService;

/// Frontend abstraction for UI layers.
///
/// Frontends own the view state and the input controller; they receive a
/// [`LookupService`] to run lookups against the configured catalog.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (terminal
    /// setup or drawing). Lookup failures are never fatal.
    async fn run(&mut self, lookups: LookupService) -> Result<()>;
}
