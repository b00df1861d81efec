//! Cross-frontend primitives for the Pokedex lookup client.
//!
//! Houses the catalog abstraction, the fetch/normalize routine, the view
//! state shared by the input controller and the presentation tree, and the
//! framework-agnostic projection that terminal (or future graphical)
//! frontends render.
pub mod catalog;
pub mod config;
pub mod error;
pub mod frontend;
pub mod lookup;
pub mod mock;
pub mod presentation;
pub mod query;
pub mod view_model;

pub use catalog::{Catalog, FlavorTextEntry, PokemonRecord, SpeciesRecord};
pub use config::{CommitPolicy, LookupConfig};
pub use error::{CatalogError, LookupError};
pub use frontend::Frontend;
pub use lookup::{LookupService, NO_DESCRIPTION};
pub use presentation::MainCardView;
pub use query::QueryInput;
pub use view_model::{
    Ability, CommitOutcome, ImageLoadIndicator, LookupResult, PendingLookup, Ticket, ViewState,
};
