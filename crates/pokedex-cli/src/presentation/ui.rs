//! UI rendering entry point.
//!
//! Composes the header, search box, main card and footer widgets into the
//! single Pokedex screen.
use anyhow::Result;
use pokedex_core::MainCardView;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Layout, Rect},
};

use crate::{
    presentation::{theme::RatatuiTheme, widgets},
    state::AppState,
};

const SEARCH_BUTTON_WIDTH: u16 = 12;

/// Rendering context containing all state needed for one frame.
pub struct RenderContext<'a> {
    pub query: &'a str,
    pub card: &'a MainCardView,
    pub app_state: &'a AppState,
}

/// Screen regions for one terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub search_input: Rect,
    pub search_button: Rect,
    pub image: Rect,
    pub description: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect) -> UiLayout {
    let [header, search, main, footer] = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Search box
        Constraint::Min(0),    // Main card
        Constraint::Length(3), // Footer
    ])
    .areas(area);

    let [search_input, search_button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(SEARCH_BUTTON_WIDTH)])
            .areas(search);

    let [image, description] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(main);

    UiLayout {
        header,
        search_input,
        search_button,
        image,
        description,
        footer,
    }
}

/// Draw one frame and return the layout used, for mouse hit-testing.
pub fn render<B: Backend>(terminal: &mut Terminal<B>, ctx: &RenderContext) -> Result<UiLayout> {
    let mut drawn = None;
    terminal.draw(|frame| {
        drawn = Some(draw(frame, ctx));
    })?;

    Ok(drawn.unwrap_or_else(|| layout(Rect::default())))
}

fn draw(frame: &mut Frame, ctx: &RenderContext) -> UiLayout {
    let theme = RatatuiTheme;
    let regions = layout(frame.area());

    widgets::header::render(frame, regions.header, &theme);
    widgets::search::render(
        frame,
        regions.search_input,
        regions.search_button,
        ctx.query,
        &theme,
    );
    widgets::artwork::render(frame, regions.image, ctx.card, ctx.app_state, &theme);
    widgets::description::render(frame, regions.description, ctx.card, &theme);
    widgets::footer::render(frame, regions.footer);

    regions
}
