//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the projected view and renders
//! to a terminal frame:
//! - Read-only access to state (immutable)
//! - No side effects, no network calls

pub mod artwork;
pub mod description;
pub mod footer;
pub mod header;
pub mod search;
