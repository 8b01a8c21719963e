//! Measured text for node labels, edge labels and panel copy.
//!
//! - [`TextDefinition`] - Reusable text style (font, size, weight, color, background)
//! - [`Text`] - A renderable text element pairing content with a [`TextDefinition`]
//! - [`wrap_text`] - Greedy word wrapping against measured widths
//!
//! Sizes are measured with `cosmic-text` through a process-wide font system
//! that is created on first use. When no font can shape the text (for example
//! on a machine without system fonts) an average glyph width is used instead.
//!
//! # Quick Start
//!
//! ```
//! # use showcase_core::draw::{TextDefinition, Text};
//! let mut style = TextDefinition::new();
//! style.set_font_size(13);
//! style.set_bold(true);
//!
//! let title = Text::new(&style, "Adaptive Profiler");
//! assert!(title.size_hint().height() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::{debug, info};
use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Insets, Point, Size},
};

/// Horizontal alignment of rendered text relative to its box.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Lines are left-aligned inside the text box.
    Start,
    /// Lines are centered inside the text box.
    #[default]
    Middle,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Visual style for text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Bold | `false` |
/// | Anchor | [`TextAnchor::Middle`] |
/// | Color | `None` (SVG default) |
/// | Background color | `None` |
/// | Padding | zero |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    anchor: TextAnchor,
    color: Option<Color>,
    background_color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// Sets the fill color. `None` keeps the SVG default (black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets a rounded background behind the text. Edge labels use this so
    /// they stay readable on top of the lines they annotate.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            bold: false,
            anchor: TextAnchor::default(),
            color: None,
            background_color: None,
            padding: Insets::default(),
        }
    }
}

/// A text element: content plus style.
///
/// Multi-line content (separated by `\n`) is rendered as one `<tspan>` per line.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Size of the text including padding.
    pub fn size_hint(&self) -> Size {
        self.size_without_padding()
            .add_padding(self.definition.padding())
    }

    fn size_without_padding(&self) -> Size {
        text_manager().measure(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.content.is_empty() {
            return output;
        }

        let definition = self.definition;
        let padding = definition.padding();
        let outer = position.to_bounds(self.size_hint());
        let inner = self.size_without_padding();

        let lines: Vec<&str> = self.content.lines().collect();
        let line_height = inner.height() / lines.len().max(1) as f32;

        let x = match definition.anchor() {
            TextAnchor::Start => outer.min_x() + padding.left(),
            TextAnchor::Middle => position.x(),
        };
        // First tspan advances by one line, so start one line above the box
        let y = outer.min_y() + padding.top() - line_height / 2.0;

        let mut rendered = svg_element::Text::new("")
            .set("x", x)
            .set("y", y)
            .set("text-anchor", definition.anchor().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size());

        if definition.bold() {
            rendered = rendered.set("font-weight", "bold");
        }

        if let Some(color) = definition.color() {
            rendered = rendered
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", x)
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered = rendered.add(tspan);
        }

        if let Some(bg_color) = definition.background_color() {
            let bg = svg_element::Rectangle::new()
                .set("x", outer.min_x())
                .set("y", outer.min_y())
                .set("width", outer.width())
                .set("height", outer.height())
                .set("fill", bg_color.to_string())
                .set("fill-opacity", bg_color.alpha())
                .set("rx", 3.0);
            output.add_to_layer(RenderLayer::Background, Box::new(bg));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered));
        output
    }

    fn size(&self) -> Size {
        self.size_hint()
    }
}

/// Splits `content` into lines no wider than `max_width` (padding excluded).
///
/// Words are never broken; a single word wider than `max_width` gets a line of
/// its own. Existing line breaks in `content` are preserved.
///
/// ```
/// # use showcase_core::draw::{TextDefinition, wrap_text};
/// let style = TextDefinition::new();
/// let lines = wrap_text("Blind to new/unknown attacks", &style, 1.0);
/// assert_eq!(lines, vec!["Blind", "to", "new/unknown", "attacks"]);
/// ```
pub fn wrap_text(content: &str, definition: &TextDefinition, max_width: f32) -> Vec<String> {
    let manager = text_manager();
    let mut lines = Vec::new();

    for paragraph in content.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if manager.measure(&candidate, definition).width() <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
    }

    debug!(lines_len = lines.len(), max_width; "Wrapped text");
    lines
}

/// Holds the shared `FontSystem`; creating one scans system fonts, so it is
/// built once per process.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Measures `text` in pixels without padding.
    fn measure(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Points to pixels at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if text_def.bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut runs = 0usize;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            runs += 1;
        }

        let line_count = text.lines().count().max(runs).max(1);
        if max_width <= 0.0 {
            // No usable font: approximate with an average glyph width
            let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * 0.55;
        }

        Size::new(max_width, line_count as f32 * metrics.line_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

fn text_manager() -> &'static TextManager {
    TEXT_MANAGER.get_or_init(TextManager::new)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "sans-serif");
        assert_eq!(def.font_size(), 12);
        assert!(!def.bold());
        assert_eq!(def.anchor(), TextAnchor::Middle);
        assert!(def.color().is_none());
        assert!(def.background_color().is_none());
    }

    #[test]
    fn test_empty_text_has_zero_size() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").size_hint();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_text_size_includes_padding() {
        let mut plain = TextDefinition::new();
        plain.set_padding(Insets::uniform(0.0));
        let mut padded = TextDefinition::new();
        padded.set_padding(Insets::uniform(6.0));

        let a = Text::new(&plain, "Telemetry feed").size_hint();
        let b = Text::new(&padded, "Telemetry feed").size_hint();
        assert_approx_eq!(f32, b.width() - a.width(), 12.0, epsilon = 0.01);
        assert_approx_eq!(f32, b.height() - a.height(), 12.0, epsilon = 0.01);
    }

    #[test]
    fn test_multiline_is_taller() {
        let def = TextDefinition::new();
        let one = Text::new(&def, "Data Plane").size_hint();
        let two = Text::new(&def, "Data Plane\nEdge Worker").size_hint();
        assert!(two.height() > one.height());
    }

    #[test]
    fn test_wrap_keeps_every_word_in_order() {
        let def = TextDefinition::new();
        let source = "Most Cloud WAFs rely heavily on static signatures and rule sets.";
        let lines = wrap_text(source, &def, 120.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), source);
    }

    #[test]
    fn test_wrap_wide_limit_is_single_line() {
        let def = TextDefinition::new();
        let lines = wrap_text("Quick blocking of known threats", &def, 10_000.0);
        assert_eq!(lines, vec!["Quick blocking of known threats"]);
    }

    #[test]
    fn test_wrap_preserves_explicit_breaks() {
        let def = TextDefinition::new();
        let lines = wrap_text("Incoming\nRequests", &def, 10_000.0);
        assert_eq!(lines, vec!["Incoming", "Requests"]);
    }

    #[test]
    fn test_render_with_background_adds_two_layers() {
        let mut def = TextDefinition::new();
        def.set_background_color(Some(Color::new("white").unwrap()));
        let output = Text::new(&def, "Store Data").render_to_layers(Point::new(10.0, 10.0));

        assert_eq!(output.count(RenderLayer::Background), 1);
        assert_eq!(output.count(RenderLayer::Text), 1);
    }

    #[test]
    fn test_render_start_anchor() {
        let mut def = TextDefinition::new();
        def.set_anchor(TextAnchor::Start);
        let output = Text::new(&def, "Risks").render_to_layers(Point::new(50.0, 50.0));
        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains("text-anchor=\"start\""));
    }
}
