//! Rendering handlers.

use anyhow::Result;
use pokedex_core::MainCardView;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the current view state and remember the search button area.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let card = MainCardView::project(&self.state);

        let ctx = ui::RenderContext {
            query: self.state.query.text(),
            card: &card,
            app_state: &self.app_state,
        };

        let layout = ui::render(terminal, &ctx)?;
        self.app_state.search_button = Some(layout.search_button);
        Ok(())
    }
}
