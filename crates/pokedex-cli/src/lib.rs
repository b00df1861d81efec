//! Terminal UI frontend for the Pokedex lookup client.
//!
//! This crate provides a terminal-based user interface. It implements the
//! `pokedex_core::Frontend` trait for pure UI work.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a LookupService for catalog access
//! - Owns the ViewState (query text, current result, image-loading flag)
//! - Spawns lookups and artwork downloads, committing their outcomes as
//!   they complete

mod app;
mod artwork;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;
