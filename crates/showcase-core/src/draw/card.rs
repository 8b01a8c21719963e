//! Node cards: rounded rectangles with a label and an optional subtitle.
//!
//! A [`CardDefinition`] holds the palette and typography shared by every node
//! of one category. A [`Card`] pairs a definition with the strings of a single
//! node and the emphasis applied to it (highlight border, selection ring).

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::{Insets, Point, Size},
};

/// Distance between the card edge and the highlight border.
const HIGHLIGHT_GAP: f32 = 3.0;
/// Distance between the card edge and the selection ring.
const RING_GAP: f32 = 7.0;

/// Shared appearance of node cards.
#[derive(Debug, Clone)]
pub struct CardDefinition {
    fill_color: Color,
    stroke: StrokeDefinition,
    corner_radius: f32,
    padding: Insets,
    min_size: Size,
    label_text: TextDefinition,
    subtitle_text: TextDefinition,
}

impl CardDefinition {
    /// Creates a card definition with the given palette and default typography.
    pub fn new(fill_color: Color, border_color: Color) -> Self {
        let mut label_text = TextDefinition::new();
        label_text.set_font_size(13);
        label_text.set_bold(true);

        let mut subtitle_text = TextDefinition::new();
        subtitle_text.set_font_size(10);
        subtitle_text.set_color(Some(Color::from_static("#4B5563")));

        Self {
            fill_color,
            stroke: StrokeDefinition::new(border_color, 2.0),
            corner_radius: 8.0,
            padding: Insets::new(8.0, 12.0, 8.0, 12.0),
            min_size: Size::new(110.0, 44.0),
            label_text,
            subtitle_text,
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn label_text(&self) -> &TextDefinition {
        &self.label_text
    }

    pub fn subtitle_text(&self) -> &TextDefinition {
        &self.subtitle_text
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Applies `family` to both the label and the subtitle.
    pub fn set_font_family(&mut self, family: &str) {
        self.label_text.set_font_family(family);
        self.subtitle_text.set_font_family(family);
    }
}

/// A single node card ready to be drawn.
///
/// ```
/// # use showcase_core::color::Color;
/// # use showcase_core::draw::{Card, CardDefinition, Drawable, RenderLayer};
/// # use showcase_core::geometry::Point;
/// let definition = CardDefinition::new(
///     Color::new("#F5F3FF").unwrap(),
///     Color::new("#C4B5FD").unwrap(),
/// );
/// let card = Card::new(&definition, "Reconciler").with_subtitle("Batch Processor");
///
/// let output = card.render_to_layers(Point::new(100.0, 120.0));
/// assert_eq!(output.count(RenderLayer::Content), 1);
/// assert_eq!(output.count(RenderLayer::Text), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Card<'a> {
    definition: &'a CardDefinition,
    label: &'a str,
    subtitle: Option<&'a str>,
    node_id: Option<&'a str>,
    highlight: Option<&'a StrokeDefinition>,
    ring: Option<&'a StrokeDefinition>,
}

impl<'a> Card<'a> {
    pub fn new(definition: &'a CardDefinition, label: &'a str) -> Self {
        Self {
            definition,
            label,
            subtitle: None,
            node_id: None,
            highlight: None,
            ring: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Tags every element of the card with `data-node="<id>"`.
    pub fn with_node_id(mut self, id: &'a str) -> Self {
        self.node_id = Some(id);
        self
    }

    /// Draws an outer border around the card.
    pub fn with_highlight(mut self, stroke: &'a StrokeDefinition) -> Self {
        self.highlight = Some(stroke);
        self
    }

    /// Draws a ring around the card, outside the highlight border.
    pub fn with_ring(mut self, stroke: &'a StrokeDefinition) -> Self {
        self.ring = Some(stroke);
        self
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_some()
    }

    pub fn is_ringed(&self) -> bool {
        self.ring.is_some()
    }

    fn label_size(&self) -> Size {
        Text::new(self.definition.label_text(), self.label).size()
    }

    fn subtitle_size(&self) -> Size {
        self.subtitle
            .map(|subtitle| Text::new(self.definition.subtitle_text(), subtitle).size())
            .unwrap_or_default()
    }

    fn content_size(&self) -> Size {
        self.label_size().merge_vertical(self.subtitle_size())
    }

    fn outline(
        &self,
        position: Point,
        gap: f32,
        stroke: &StrokeDefinition,
    ) -> svg::node::element::Rectangle {
        let bounds = position
            .to_bounds(self.size())
            .add_padding(Insets::uniform(gap));
        let rect = svg::node::element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", self.definition.corner_radius() + gap)
            .set("fill", "none");
        let rect = crate::apply_stroke!(rect, stroke);
        match self.node_id {
            Some(id) => rect.set("data-node", id),
            None => rect,
        }
    }
}

impl Drawable for Card<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = self.definition;
        let size = self.size();
        let bounds = position.to_bounds(size);

        if let Some(ring) = self.ring {
            let outline = self.outline(position, RING_GAP, ring);
            output.add_to_layer(RenderLayer::Highlight, Box::new(outline));
        }
        if let Some(highlight) = self.highlight {
            let outline = self.outline(position, HIGHLIGHT_GAP, highlight);
            output.add_to_layer(RenderLayer::Highlight, Box::new(outline));
        }

        let rect = svg::node::element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", definition.corner_radius())
            .set("fill", definition.fill_color())
            .set("fill-opacity", definition.fill_color().alpha());
        let mut rect = crate::apply_stroke!(rect, definition.stroke());
        if let Some(id) = self.node_id {
            rect = rect.set("data-node", id);
        }
        output.add_to_layer(RenderLayer::Content, Box::new(rect));

        // Label and subtitle are stacked and centered as a block
        let label_size = self.label_size();
        let subtitle_size = self.subtitle_size();
        let block_top = position.y() - (label_size.height() + subtitle_size.height()) / 2.0;

        let label_center = Point::new(position.x(), block_top + label_size.height() / 2.0);
        output.merge(Text::new(definition.label_text(), self.label).render_to_layers(label_center));

        if let Some(subtitle) = self.subtitle {
            let subtitle_center = Point::new(
                position.x(),
                block_top + label_size.height() + subtitle_size.height() / 2.0,
            );
            let subtitle_text = Text::new(definition.subtitle_text(), subtitle);
            output.merge(subtitle_text.render_to_layers(subtitle_center));
        }

        output
    }

    fn size(&self) -> Size {
        let stroke_width = self.definition.stroke().width();
        let inner = self
            .content_size()
            .add_padding(self.definition.padding())
            .max(self.definition.min_size());
        Size::new(inner.width() + stroke_width, inner.height() + stroke_width)
    }
}

/// Returns the point where the segment from the center `a` towards `b` leaves
/// a rectangle of `a_size` centered on `a`.
///
/// Returns `b` when the two points coincide.
pub fn find_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    let dist = b.sub_point(a);
    let length = dist.hypot();
    if length < 0.001 {
        return b;
    }

    let dx = dist.x() / length;
    let dy = dist.y() / length;

    // Distance along the ray to the nearest vertical and horizontal edge
    let tx = if dx.abs() > f32::EPSILON {
        half_width / dx.abs()
    } else {
        f32::MAX
    };
    let ty = if dy.abs() > f32::EPSILON {
        half_height / dy.abs()
    } else {
        f32::MAX
    };

    let t = tx.min(ty);
    Point::new(dx.mul_add(t, a.x()), dy.mul_add(t, a.y()))
}
