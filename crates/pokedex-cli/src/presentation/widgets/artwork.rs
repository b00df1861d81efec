//! Image region: placeholder, loading spinner, or the decoded artwork.

use pokedex_core::{
    MainCardView,
    presentation::{IMAGE_PLACEHOLDER, ImagePanel},
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Color,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    artwork::{CellGrid, HalfCell, fit_cells},
    presentation::theme::RatatuiTheme,
    state::AppState,
};

/// Render the image region of the main card.
///
/// A `Ready` panel whose artwork failed to decode falls back to the
/// placeholder, like a result without an artwork URL.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    card: &MainCardView,
    app_state: &AppState,
    theme: &RatatuiTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let panel = match card {
        MainCardView::Empty => None,
        MainCardView::Populated { image, .. } => Some(image),
    };

    match panel {
        Some(ImagePanel::Loading { .. }) => {
            let label = format!("{} loading", app_state.spinner());
            let area = centered_rows(inner, &label);
            let spinner = Paragraph::new(label)
                .style(theme.spinner())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(spinner, area);
        }
        Some(ImagePanel::Ready { url }) => match app_state
            .artwork_for(url)
            .and_then(|artwork| fit_cells(&artwork.image, inner.width, inner.height))
        {
            Some(grid) => frame.render_widget(ArtworkWidget { grid: &grid }, inner),
            None => render_placeholder(frame, inner, theme),
        },
        Some(ImagePanel::Placeholder) | None => render_placeholder(frame, inner, theme),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let placeholder = Paragraph::new(IMAGE_PLACEHOLDER)
        .style(theme.placeholder())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(placeholder, centered_rows(area, IMAGE_PLACEHOLDER));
}

/// Vertically centered band tall enough for `text` wrapped to `area.width`.
fn centered_rows(area: Rect, text: &str) -> Rect {
    let [_, band, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(wrapped_height(text, area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    band
}

/// Rows needed to word-wrap `text` into `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut rows = 1u16;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if used > 0 && needed > width {
            rows = rows.saturating_add(1);
            used = len;
        } else {
            used = needed;
        }
        // Words longer than the panel are broken across rows.
        while used > width {
            rows = rows.saturating_add(1);
            used -= width;
        }
    }
    rows
}

/// Draws a [`CellGrid`] with upper/lower half blocks.
struct ArtworkWidget<'a> {
    grid: &'a CellGrid,
}

impl Widget for ArtworkWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let Some(HalfCell { top, bottom }) = self.grid.cell(x, y) else {
                    continue;
                };
                let px = area.x + self.grid.offset_x + x;
                let py = area.y + self.grid.offset_y + y;
                if px >= area.right() || py >= area.bottom() {
                    continue;
                }
                let Some(cell) = buf.cell_mut((px, py)) else {
                    continue;
                };

                match (top, bottom) {
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol("▀").set_fg(rgb(top)).set_bg(rgb(bottom));
                    }
                    (Some(top), None) => {
                        cell.set_symbol("▀").set_fg(rgb(top)).set_bg(Color::Reset);
                    }
                    (None, Some(bottom)) => {
                        cell.set_symbol("▄").set_fg(rgb(bottom)).set_bg(Color::Reset);
                    }
                    (None, None) => {}
                }
            }
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::Artwork;
    use image::{Rgba, RgbaImage};
    use pokedex_core::{LookupResult, Ticket, ViewState};
    use ratatui::{Terminal, backend::TestBackend};

    fn state_with_artwork(url: &str) -> ViewState {
        let mut state = ViewState::default();
        state.commit(
            Ticket(0),
            Some(LookupResult {
                name: "pikachu".into(),
                numeric_id: 25,
                image_url: Some(url.into()),
                categories: vec![],
                description: String::new(),
                abilities: vec![],
            }),
        );
        state
    }

    fn draw(card: &MainCardView, app_state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), card, app_state, &RatatuiTheme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Screen text with each row trimmed and rows joined by single spaces,
    /// so wrapped lines read as one sentence.
    fn screen_text(buf: &Buffer) -> String {
        let mut rows = Vec::new();
        for y in 0..buf.area.height {
            let mut row = String::new();
            for x in 0..buf.area.width {
                row.push_str(buf[(x, y)].symbol());
            }
            let row = row.trim_matches(|c: char| c == '│' || c.is_whitespace());
            if !row.is_empty() {
                rows.push(row.to_string());
            }
        }
        rows.join(" ")
    }

    fn contains(buf: &Buffer, needle: &str) -> bool {
        screen_text(buf).contains(needle)
    }

    #[test]
    fn loading_panel_shows_spinner() {
        let state = state_with_artwork("25.png");
        let card = MainCardView::project(&state);
        let buf = draw(&card, &AppState::new());
        assert!(contains(&buf, "loading"));
    }

    #[test]
    fn ready_panel_draws_half_blocks() {
        let mut state = state_with_artwork("25.png");
        state.finish_image("25.png");
        let card = MainCardView::project(&state);

        let mut app_state = AppState::new();
        app_state.artwork = Some(Artwork {
            url: "25.png".into(),
            image: RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255])),
        });

        let buf = draw(&card, &app_state);
        assert!(contains(&buf, "▀"));
        assert!(!contains(&buf, "No pokemon"));
    }

    #[test]
    fn ready_panel_without_decoded_image_falls_back() {
        let mut state = state_with_artwork("25.png");
        state.finish_image("25.png");
        let card = MainCardView::project(&state);

        let buf = draw(&card, &AppState::new());
        assert!(contains(&buf, "No pokemon to display!"));
    }

    #[test]
    fn placeholder_wraps_in_narrow_panel() {
        let mut terminal = Terminal::new(TestBackend::new(12, 8)).unwrap();
        terminal
            .draw(|frame| {
                render(
                    frame,
                    frame.area(),
                    &MainCardView::Empty,
                    &AppState::new(),
                    &RatatuiTheme,
                )
            })
            .unwrap();

        let buf = terminal.backend().buffer().clone();
        assert!(contains(&buf, "No pokemon to display!"));
    }

    #[test]
    fn wrapped_height_counts_word_breaks() {
        assert_eq!(wrapped_height(IMAGE_PLACEHOLDER, 40), 1);
        assert_eq!(wrapped_height(IMAGE_PLACEHOLDER, 18), 2);
        assert_eq!(wrapped_height(IMAGE_PLACEHOLDER, 10), 3);
        assert_eq!(wrapped_height("abcdefghij", 4), 3);
    }
}
