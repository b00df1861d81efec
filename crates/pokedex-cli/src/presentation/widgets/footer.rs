//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::raw("[Type] Name or number | "),
        Span::raw("[Enter/Click search] Look up | "),
        Span::raw("[Backspace] Delete | "),
        Span::raw("[Ctrl+U] Clear | "),
        Span::raw("[Esc] Quit"),
    ])];

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
