//! Framework-agnostic projection of [`ViewState`] for the main card.
//!
//! Widgets in any frontend render [`MainCardView`]; all text shaping
//! (capitalization, the `PokeNo: #` prefix, placeholder strings) is done
//! here so every frontend shows the same thing.
use crate::view_model::ViewState;

pub const TITLE: &str = "POKEDEX";
pub const INFO_LABEL: &str = "Info";
pub const EXIT_LABEL: &str = "⨉";
pub const SEARCH_LABEL: &str = "search";
pub const IMAGE_PLACEHOLDER: &str = "No pokemon to display!";
pub const DESCRIPTION_PLACEHOLDER: &str = "Search a pokemon to read info!";
pub const TYPES_TITLE: &str = "Type:";
pub const ABILITIES_TITLE: &str = "Abilities:";

/// Main panel contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MainCardView {
    /// No result: both regions show their prompt.
    Empty,
    Populated {
        image: ImagePanel,
        description: DescriptionPanel,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImagePanel {
    /// The result has no artwork URL.
    Placeholder,
    Loading { url: String },
    Ready { url: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptionPanel {
    pub number: String,
    pub name: String,
    pub categories: Vec<CategoryChip>,
    pub abilities: Vec<String>,
    pub description: String,
}

/// A type tag; `key` selects the chip color, `label` is displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryChip {
    pub key: String,
    pub label: String,
}

impl MainCardView {
    pub fn project(state: &ViewState) -> Self {
        let Some(result) = state.result() else {
            return MainCardView::Empty;
        };

        let image = match result.image_url.as_deref() {
            None => ImagePanel::Placeholder,
            Some(url) if state.image_loading() => ImagePanel::Loading {
                url: url.to_string(),
            },
            Some(url) => ImagePanel::Ready {
                url: url.to_string(),
            },
        };

        let description = DescriptionPanel {
            number: format!("PokeNo: #{}", result.numeric_id),
            name: capitalize(&result.name),
            categories: result
                .categories
                .iter()
                .map(|key| CategoryChip {
                    key: key.clone(),
                    label: capitalize(key),
                })
                .collect(),
            abilities: result.ability_names().map(str::to_owned).collect(),
            description: result.description.clone(),
        };

        MainCardView::Populated { image, description }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MainCardView::Empty)
    }
}

/// Upper-cases the first character and keeps the rest as-is.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
