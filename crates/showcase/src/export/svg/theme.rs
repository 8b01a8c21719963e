//! Resolved colors and typography for one render.

use indexmap::IndexMap;

use showcase_core::{
    color::Color,
    draw::{CardDefinition, StrokeDefinition, TextAnchor, TextDefinition},
    geometry::Insets,
};

use crate::{ShowcaseError, catalog::Category, config::StyleConfig};

const DEFAULT_BACKGROUND: &str = "#F9FAFB";
const SELECTION_RING: &str = "#3B82F6";

/// Text styles of the detail panel and the feature overlay.
#[derive(Debug)]
pub(super) struct PanelFonts {
    pub(super) title: TextDefinition,
    pub(super) heading: TextDefinition,
    pub(super) paragraph: TextDefinition,
    pub(super) check_mark: TextDefinition,
    pub(super) caption: TextDefinition,
    pub(super) note_heading: TextDefinition,
    pub(super) note_text: TextDefinition,
    pub(super) tag: TextDefinition,
}

#[derive(Debug)]
pub(super) struct Theme {
    pub(super) background: Color,
    pub(super) highlight: StrokeDefinition,
    pub(super) selection: StrokeDefinition,
    pub(super) header: TextDefinition,
    pub(super) button: TextDefinition,
    pub(super) active_button: TextDefinition,
    pub(super) edge_label: TextDefinition,
    pub(super) panel: PanelFonts,
    cards: IndexMap<Category, CardDefinition>,
}

impl Theme {
    pub(super) fn from_style(style: &StyleConfig) -> Result<Self, ShowcaseError> {
        let background = style
            .background_color()
            .map_err(ShowcaseError::Config)?
            .unwrap_or_else(|| Color::from_static(DEFAULT_BACKGROUND));
        let highlight_color = style.highlight_color().map_err(ShowcaseError::Config)?;
        let family = style.font_family();

        let mut cards = IndexMap::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let palette = category.palette();
            let fill = Color::new(palette.fill()).map_err(ShowcaseError::Config)?;
            let border = Color::new(palette.border()).map_err(ShowcaseError::Config)?;
            let mut definition = CardDefinition::new(fill, border);
            definition.set_font_family(family);
            cards.insert(category, definition);
        }

        let mut edge_label = text(family, 10, false, "#374151");
        edge_label.set_background_color(Some(Color::from_static("white").with_alpha(0.85)));
        edge_label.set_padding(Insets::new(2.0, 4.0, 2.0, 4.0));

        let mut tag = text(family, 10, false, "#1E40AF");
        tag.set_background_color(Some(Color::from_static("#DBEAFE")));
        tag.set_padding(Insets::new(3.0, 8.0, 3.0, 8.0));

        Ok(Self {
            background,
            highlight: StrokeDefinition::new(highlight_color, 3.0),
            selection: StrokeDefinition::new(Color::from_static(SELECTION_RING), 2.0),
            header: text(family, 24, true, "#1F2937"),
            button: text(family, 13, true, "#374151"),
            active_button: text(family, 13, true, "white"),
            edge_label,
            panel: PanelFonts {
                title: left(text(family, 17, true, "#1F2937")),
                heading: left(text(family, 14, true, "#374151")),
                paragraph: left(text(family, 12, false, "#4B5563")),
                check_mark: left(text(family, 12, true, "#22C55E")),
                caption: left(text(family, 10, false, "#3B82F6")),
                note_heading: left(text(family, 12, true, "#374151")),
                note_text: left(text(family, 11, false, "#4B5563")),
                tag: left(tag),
            },
            cards,
        })
    }

    /// Card definition of `category`. Every category is registered at construction.
    pub(super) fn card(&self, category: Category) -> Option<&CardDefinition> {
        self.cards.get(&category)
    }
}

fn text(family: &str, size: u16, bold: bool, color: &'static str) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(family);
    definition.set_font_size(size);
    definition.set_bold(bold);
    definition.set_color(Some(Color::from_static(color)));
    definition
}

fn left(mut definition: TextDefinition) -> TextDefinition {
    definition.set_anchor(TextAnchor::Start);
    definition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_registers_every_category() {
        let theme = Theme::from_style(&StyleConfig::default()).unwrap();
        for category in Category::ALL {
            assert!(theme.card(category).is_some(), "{category}");
        }
    }

    #[test]
    fn test_default_background() {
        let theme = Theme::from_style(&StyleConfig::default()).unwrap();
        assert_eq!(theme.background, Color::new(DEFAULT_BACKGROUND).unwrap());
    }

    #[test]
    fn test_invalid_highlight_is_config_error() {
        let style: StyleConfig = toml::from_str("highlight_color = \"nope\"").unwrap();
        assert!(matches!(
            Theme::from_style(&style),
            Err(ShowcaseError::Config(_))
        ));
    }
}
