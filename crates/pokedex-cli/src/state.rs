//! Terminal-only UI state that sits next to the shared `ViewState`.

use ratatui::layout::Rect;

use crate::artwork::Artwork;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Mutable presentation state owned by the event loop.
#[derive(Debug, Default)]
pub struct AppState {
    /// Decoded image for the current artwork key, once it has loaded.
    pub artwork: Option<Artwork>,
    /// Search button rectangle from the last draw, for click hit-testing.
    pub search_button: Option<Rect>,
    spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Artwork for `url`, if that exact image is the one decoded.
    pub fn artwork_for(&self, url: &str) -> Option<&Artwork> {
        self.artwork.as_ref().filter(|artwork| artwork.url == url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_wraps() {
        let mut state = AppState::new();
        let first = state.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            state.advance_spinner();
        }
        assert_eq!(state.spinner(), first);
    }
}
