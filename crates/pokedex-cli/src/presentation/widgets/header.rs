//! Header widget: static title bar.

use pokedex_core::presentation::{EXIT_LABEL, INFO_LABEL, TITLE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the title bar with the info and close markers on either side.
pub fn render(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, center, right] = Layout::horizontal([
        Constraint::Length(8),
        Constraint::Min(0),
        Constraint::Length(8),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(INFO_LABEL)
            .style(theme.header_side())
            .alignment(Alignment::Left),
        left,
    );
    frame.render_widget(
        Paragraph::new(TITLE)
            .style(theme.title())
            .alignment(Alignment::Center),
        center,
    );
    frame.render_widget(
        Paragraph::new(EXIT_LABEL)
            .style(theme.header_side())
            .alignment(Alignment::Right),
        right,
    );
}
