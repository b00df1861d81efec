//! Event handling for the CLI client.
//!
//! This module contains the event loop orchestrator that coordinates user
//! input, lookup and artwork completions, and UI updates.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
