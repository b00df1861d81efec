//! Search box widget: query field plus the submit button.

use pokedex_core::presentation::SEARCH_LABEL;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

const CARET: &str = "▏";

/// Render the text field bound to `query` and the `search` button.
pub fn render(
    frame: &mut Frame,
    input_area: Rect,
    button_area: Rect,
    query: &str,
    theme: &RatatuiTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .title(" Name or number ");

    // Keep the tail of long queries visible.
    let visible = block.inner(input_area).width.saturating_sub(1) as usize;
    let count = query.chars().count();
    let shown: String = query.chars().skip(count.saturating_sub(visible)).collect();

    let line = Line::from(vec![
        Span::styled(shown, theme.input()),
        Span::styled(CARET, theme.spinner()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), input_area);

    let button = Paragraph::new(SEARCH_LABEL)
        .style(theme.button())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.frame()));
    frame.render_widget(button, button_area);
}
