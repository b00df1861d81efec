//! Ratatui color scheme for the Pokedex screen.

use ratatui::style::{Color, Modifier, Style};

/// Fallback chip color for type names the theme does not know.
const UNKNOWN_TYPE: Color = Color::Rgb(0x68, 0xA0, 0x90);

/// Consistent color and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Rgb(0xFF, 0xCB, 0x05))
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_side(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn frame(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn input(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(0xFF, 0xCB, 0x05))
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn number(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn name(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title(&self) -> Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ability(&self) -> Style {
        Style::default().fg(Color::LightCyan)
    }

    pub fn spinner(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    /// Chip style for a category tag.
    pub fn chip(&self, type_name: &str) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(type_color(type_name))
            .add_modifier(Modifier::BOLD)
    }
}

/// Background color for each catalog type name.
pub fn type_color(type_name: &str) -> Color {
    match type_name {
        "normal" => Color::Rgb(0xA8, 0xA7, 0x7A),
        "fire" => Color::Rgb(0xEE, 0x81, 0x30),
        "water" => Color::Rgb(0x63, 0x90, 0xF0),
        "electric" => Color::Rgb(0xF7, 0xD0, 0x2C),
        "grass" => Color::Rgb(0x7A, 0xC7, 0x4C),
        "ice" => Color::Rgb(0x96, 0xD9, 0xD6),
        "fighting" => Color::Rgb(0xC2, 0x2E, 0x28),
        "poison" => Color::Rgb(0xA3, 0x3E, 0xA1),
        "ground" => Color::Rgb(0xE2, 0xBF, 0x65),
        "flying" => Color::Rgb(0xA9, 0x8F, 0xF3),
        "psychic" => Color::Rgb(0xF9, 0x55, 0x87),
        "bug" => Color::Rgb(0xA6, 0xB9, 0x1A),
        "rock" => Color::Rgb(0xB6, 0xA1, 0x36),
        "ghost" => Color::Rgb(0x73, 0x57, 0x97),
        "dragon" => Color::Rgb(0x6F, 0x35, 0xFC),
        "dark" => Color::Rgb(0x70, 0x57, 0x46),
        "steel" => Color::Rgb(0xB7, 0xB7, 0xCE),
        "fairy" => Color::Rgb(0xD6, 0x85, 0xAD),
        _ => UNKNOWN_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_have_distinct_colors() {
        assert_ne!(type_color("fire"), type_color("water"));
        assert_eq!(type_color("stellar"), UNKNOWN_TYPE);
    }
}
