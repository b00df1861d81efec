//! Description region: number, name, type chips, abilities and flavor text.

use pokedex_core::{
    MainCardView,
    presentation::{ABILITIES_TITLE, DESCRIPTION_PLACEHOLDER, DescriptionPanel, TYPES_TITLE},
};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, card: &MainCardView, theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame())
        .padding(Padding::horizontal(1));

    let paragraph = match card {
        MainCardView::Empty => Paragraph::new(DESCRIPTION_PLACEHOLDER)
            .style(theme.placeholder())
            .alignment(Alignment::Center),
        MainCardView::Populated { description, .. } => {
            Paragraph::new(panel_lines(description, theme))
        }
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}

fn panel_lines<'a>(panel: &'a DescriptionPanel, theme: &RatatuiTheme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::styled(panel.number.as_str(), theme.number()),
        Line::styled(panel.name.as_str(), theme.name()),
        Line::default(),
    ];

    let mut types = vec![Span::styled(TYPES_TITLE, theme.section_title())];
    for chip in &panel.categories {
        types.push(Span::raw(" "));
        types.push(Span::styled(format!(" {} ", chip.label), theme.chip(&chip.key)));
    }
    lines.push(Line::from(types));
    lines.push(Line::default());

    lines.push(Line::styled(ABILITIES_TITLE, theme.section_title()));
    lines.extend(
        panel
            .abilities
            .iter()
            .map(|name| Line::styled(format!("• {name}"), theme.ability())),
    );
    lines.push(Line::default());

    lines.push(Line::raw(panel.description.as_str()));
    lines
}
