//! Vertical text flow for the detail panel and the feature overlay.

use svg::node::element as svg_element;

use showcase_core::{
    draw::{Drawable as _, LayeredOutput, RenderLayer, Text, TextDefinition, wrap_text},
    geometry::Point,
};

use super::theme::PanelFonts;
use crate::panel::Block;

const BLOCK_GAP: f32 = 6.0;
const SECTION_GAP: f32 = 10.0;
const BULLET_INDENT: f32 = 14.0;
const TAG_GAP: f32 = 6.0;
const FRAME_BLEED: f32 = 8.0;

/// Lays [`Block`]s out top to bottom in a column of fixed width.
///
/// Coordinates start at the column's top-left corner; the caller translates
/// the finished output into place.
pub(super) struct TextFlow<'a> {
    fonts: &'a PanelFonts,
    width: f32,
    y: f32,
    output: LayeredOutput,
}

impl<'a> TextFlow<'a> {
    pub(super) fn new(fonts: &'a PanelFonts, width: f32) -> Self {
        Self {
            fonts,
            width,
            y: 0.0,
            output: LayeredOutput::new(),
        }
    }

    /// Current vertical position.
    pub(super) fn cursor(&self) -> f32 {
        self.y
    }

    pub(super) fn gap(&mut self, height: f32) {
        self.y += height;
    }

    pub(super) fn push_blocks(&mut self, blocks: &[Block<'_>]) {
        for (index, block) in blocks.iter().enumerate() {
            if index > 0 && matches!(block, Block::Heading(_) | Block::Note { .. }) {
                self.gap(SECTION_GAP);
            }
            self.push_block(block);
        }
    }

    pub(super) fn push_block(&mut self, block: &Block<'_>) {
        let fonts = self.fonts;
        match *block {
            Block::Title(text) => self.place(&fonts.title, text, 0.0),
            Block::Heading(text) => self.place(&fonts.heading, text, 0.0),
            Block::Paragraph(text) => self.place(&fonts.paragraph, text, 0.0),
            Block::Caption(text) => self.place(&fonts.caption, text, 0.0),
            Block::Bullet { lead, text } => {
                self.mark(&fonts.paragraph, "•");
                if let Some(lead) = lead {
                    self.place(&fonts.note_heading, lead, BULLET_INDENT);
                }
                self.place(&fonts.paragraph, text, BULLET_INDENT);
            }
            Block::Check(text) => {
                self.mark(&fonts.check_mark, "✓");
                self.place(&fonts.paragraph, text, BULLET_INDENT);
            }
            Block::Tags(tags) => self.place_tags(tags),
            Block::Note { heading, text } => {
                let top = self.y;
                self.gap(FRAME_BLEED);
                self.place(&fonts.note_heading, heading, 0.0);
                self.place(&fonts.note_text, text, 0.0);
                self.gap(FRAME_BLEED);
                self.frame(top, "#EFF6FF", "#BFDBFE");
            }
        }
        self.gap(BLOCK_GAP);
    }

    /// Draws a rounded box behind everything placed since `top`.
    pub(super) fn frame(&mut self, top: f32, fill: &str, border: &str) {
        let rect = svg_element::Rectangle::new()
            .set("x", -FRAME_BLEED)
            .set("y", top)
            .set("width", self.width + 2.0 * FRAME_BLEED)
            .set("height", self.y - top)
            .set("rx", 8)
            .set("fill", fill)
            .set("stroke", border)
            .set("stroke-width", 1);
        self.output
            .add_to_layer(RenderLayer::Background, Box::new(rect));
    }

    /// Returns the rendered column and its height.
    pub(super) fn finish(self) -> (LayeredOutput, f32) {
        (self.output, self.y)
    }

    /// Places wrapped `content` at `indent` and advances the cursor.
    fn place(&mut self, definition: &TextDefinition, content: &str, indent: f32) {
        let max_width = self.width - indent - definition.padding().horizontal_sum();
        let wrapped = wrap_text(content, definition, max_width).join("\n");
        let text = Text::new(definition, &wrapped);
        let size = text.size_hint();
        let center = Point::new(indent + size.width() / 2.0, self.y + size.height() / 2.0);
        self.output.merge(text.render_to_layers(center));
        self.y += size.height();
    }

    /// Places a list marker at the left edge without advancing the cursor.
    fn mark(&mut self, definition: &TextDefinition, marker: &str) {
        let text = Text::new(definition, marker);
        let size = text.size_hint();
        let center = Point::new(size.width() / 2.0, self.y + size.height() / 2.0);
        self.output.merge(text.render_to_layers(center));
    }

    fn place_tags(&mut self, tags: &[&str]) {
        let fonts = self.fonts;
        let definition = &fonts.tag;
        let mut x = 0.0;
        let mut row_height: f32 = 0.0;
        for tag in tags {
            let text = Text::new(definition, tag);
            let size = text.size_hint();
            if x > 0.0 && x + size.width() > self.width {
                self.y += row_height + TAG_GAP;
                x = 0.0;
                row_height = 0.0;
            }
            let center = Point::new(x + size.width() / 2.0, self.y + size.height() / 2.0);
            self.output.merge(text.render_to_layers(center));
            x += size.width() + TAG_GAP;
            row_height = row_height.max(size.height());
        }
        self.y += row_height;
    }
}
