//! Layer-based rendering for SVG output.
//!
//! Drawables push their SVG nodes onto a [`RenderLayer`]; when the document is
//! assembled every layer becomes one `<g data-layer="...">` group, emitted
//! bottom to top.
//!
//! # Example
//!
//! ```
//! # use showcase_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Rectangle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Traffic")));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! // Background is emitted first even though it was added last
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Boxed SVG node.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Page and panel backgrounds, text backgrounds
    Background,
    /// Buttons of the mode toggle and stage stepper
    Chrome,
    /// Glow behind highlighted nodes
    Highlight,
    /// Node cards
    Content,
    /// Edges between nodes
    Arrow,
    /// Labels and panel text
    Text,
}

impl RenderLayer {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Chrome => "chrome",
            Self::Highlight => "highlight",
            Self::Content => "content",
            Self::Arrow => "arrow",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by [`RenderLayer`].
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the given layer. Insertion order is kept within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves every node of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes on the given layer.
    pub fn count(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Consumes the output and returns one group per non-empty layer, in z-order.
    pub fn render(mut self) -> Vec<SvgNode> {
        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut items = self.items.into_iter();
        let Some((first_layer, first_node)) = items.next() else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut current_layer = first_layer;
        let mut current_group = svg_element::Group::new()
            .set("data-layer", first_layer.name())
            .add(first_node);

        for (layer, node) in items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }
            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);
        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_layered_output_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        assert_eq!(output.count(RenderLayer::Content), 2);
        assert_eq!(output.render().len(), 2);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Highlight, Box::new(Rectangle::new()));

        first.merge(second);
        assert_eq!(first.count(RenderLayer::Highlight), 1);
        assert_eq!(first.render().len(), 2);
    }

    #[test]
    fn test_render_order_follows_layer_order() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered[0].contains("data-layer=\"background\""));
        assert!(rendered[1].contains("data-layer=\"text\""));
    }

    #[test]
    fn test_layer_ordering() {
        assert!(RenderLayer::Background < RenderLayer::Chrome);
        assert!(RenderLayer::Highlight < RenderLayer::Content);
        assert!(RenderLayer::Arrow < RenderLayer::Text);
    }
}
