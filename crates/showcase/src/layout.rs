//! Node placement.
//!
//! Position hints in the tables are top-left corners in authoring
//! coordinates. [`DiagramLayout::compute`] scales them, centers each node on
//! its measured card, and shifts the result so the diagram starts at the
//! origin. Rendering then only adds a page offset.

use indexmap::IndexMap;
use log::{debug, warn};

use showcase_core::{
    draw::find_intersection,
    geometry::{Bounds, Point, Size},
};

use crate::{
    ShowcaseError,
    catalog::NodeId,
    diagram::{Diagram, DiagramEdge, DiagramNode},
};

/// A node's final center and outer size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedNode {
    center: Point,
    size: Size,
}

impl PlacedNode {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        self.center.to_bounds(self.size)
    }
}

/// Placed nodes of one diagram, relative to the diagram's top-left corner.
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    nodes: IndexMap<NodeId, PlacedNode>,
    bounds: Bounds,
}

impl DiagramLayout {
    /// Places every node of `diagram`.
    ///
    /// `size_of` returns the outer size of a node's card.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Layout`] if `scale` is not a positive number.
    /// Cards that overlap at this scale are still placed and logged.
    pub fn compute(
        diagram: &Diagram,
        scale: f32,
        size_of: impl Fn(&DiagramNode) -> Size,
    ) -> Result<Self, ShowcaseError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ShowcaseError::Layout(format!(
                "scale must be a positive number, got {scale}"
            )));
        }

        let mut nodes = IndexMap::with_capacity(diagram.node_count());
        for node in diagram.nodes() {
            let size = size_of(node);
            let (x, y) = node.position_hint();
            let top_left = Point::new(x, y).scale(scale);
            let center = Bounds::new_from_top_left(top_left, size).center();
            nodes.insert(node.id(), PlacedNode { center, size });
        }

        let bounds = nodes
            .values()
            .map(PlacedNode::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default();

        // Move the top-left corner of the diagram to the origin
        let offset = Point::new(-bounds.min_x(), -bounds.min_y());
        for placed in nodes.values_mut() {
            placed.center = placed.center.add_point(offset);
        }
        let bounds = bounds.translate(offset);

        let layout = Self { nodes, bounds };
        layout.warn_overlaps(scale);

        debug!(
            nodes_len = layout.nodes.len(),
            width = layout.bounds.width(),
            height = layout.bounds.height();
            "Diagram laid out"
        );
        Ok(layout)
    }

    /// Returns every pair of cards whose bounds intersect.
    pub fn overlaps(&self) -> Vec<(NodeId, NodeId)> {
        let placed: Vec<_> = self.nodes.iter().collect();
        let mut pairs = Vec::new();
        for (index, (id, node)) in placed.iter().enumerate() {
            for (other_id, other) in &placed[index + 1..] {
                if node.bounds().intersects(&other.bounds()) {
                    pairs.push((**id, **other_id));
                }
            }
        }
        pairs
    }

    fn warn_overlaps(&self, scale: f32) {
        for (node, other) in self.overlaps() {
            warn!(
                node:% = node,
                other:% = other,
                scale;
                "Cards overlap, raise the scale to separate them"
            );
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&PlacedNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &PlacedNode)> {
        self.nodes.iter().map(|(id, placed)| (*id, placed))
    }

    /// Bounds of all cards, with the top-left corner at the origin.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns where `edge` leaves its source card and enters its target card.
    pub fn edge_endpoints(&self, edge: &DiagramEdge) -> Option<(Point, Point)> {
        let source = self.nodes.get(&edge.source())?;
        let target = self.nodes.get(&edge.target())?;

        let start = find_intersection(source.center, target.center, source.size);
        let end = find_intersection(target.center, source.center, target.size);
        Some((start, end))
    }
}
