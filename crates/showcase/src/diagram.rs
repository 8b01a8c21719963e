//! Diagram derivation.
//!
//! [`derive`] turns a `(stage, mode)` pair into the node/edge graph to draw.
//! It is a pure function over the static tables in [`crate::catalog`] and is
//! recomputed on every call; nothing is cached between renders.
//!
//! ```
//! use showcase::catalog::{NodeId, StageId};
//! use showcase::diagram::derive;
//! use showcase::state::ViewMode;
//!
//! let diagram = derive(StageId::Transition, ViewMode::Flow);
//! assert!(diagram.contains(NodeId::Profiler));
//! assert!(!diagram.contains(NodeId::App));
//! ```

use std::fmt;

use indexmap::IndexMap;
use log::{debug, trace};

use showcase_core::{
    color::Color,
    draw::{ArrowPath, StrokeDefinition, StrokeStyle},
};

use crate::{
    ShowcaseError,
    catalog::{self, Category, NodeId, StageId},
    state::ViewMode,
};

/// A node of a derived diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramNode {
    id: NodeId,
    label: &'static str,
    subtitle: Option<&'static str>,
    category: Category,
    position_hint: (f32, f32),
    highlighted: bool,
}

impl DiagramNode {
    pub(crate) const fn new(
        id: NodeId,
        label: &'static str,
        category: Category,
        position_hint: (f32, f32),
    ) -> Self {
        Self {
            id,
            label,
            subtitle: None,
            category,
            position_hint,
            highlighted: false,
        }
    }

    pub(crate) const fn with_subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    fn with_highlight(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        self.subtitle
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Top-left corner of the node in authoring coordinates.
    pub fn position_hint(&self) -> (f32, f32) {
        self.position_hint
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Rendering hints of an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    color: &'static str,
    width: f32,
    dash: Option<&'static str>,
    path: ArrowPath,
}

impl EdgeStyle {
    pub(crate) const fn solid(color: &'static str, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
            path: ArrowPath::Straight,
        }
    }

    pub(crate) const fn dashed(mut self, pattern: &'static str) -> Self {
        self.dash = Some(pattern);
        self
    }

    pub(crate) const fn curved(mut self) -> Self {
        self.path = ArrowPath::Curved;
        self
    }

    /// CSS color literal of the stroke.
    pub fn color(&self) -> &'static str {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// SVG dash pattern, `None` for solid lines.
    pub fn dash(&self) -> Option<&'static str> {
        self.dash
    }

    pub fn path(&self) -> ArrowPath {
        self.path
    }

    /// Converts the hints into a stroke definition.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Diagram`] if the color or dash pattern does not parse.
    pub fn to_stroke(&self) -> Result<StrokeDefinition, ShowcaseError> {
        let color = Color::new(self.color).map_err(ShowcaseError::Diagram)?;
        let mut stroke = StrokeDefinition::new(color, self.width);
        if let Some(pattern) = self.dash {
            let style: StrokeStyle = pattern.parse().map_err(ShowcaseError::Diagram)?;
            stroke.set_style(style);
        }
        Ok(stroke)
    }
}

/// A directed, labelled edge of a derived diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramEdge {
    id: &'static str,
    source: NodeId,
    target: NodeId,
    label: &'static str,
    style: EdgeStyle,
}

impl DiagramEdge {
    pub(crate) const fn new(
        id: &'static str,
        source: NodeId,
        target: NodeId,
        label: &'static str,
        style: EdgeStyle,
    ) -> Self {
        Self {
            id,
            source,
            target,
            label,
            style,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }
}

/// The node/edge graph of one `(stage, mode)` view.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    stage: StageId,
    mode: ViewMode,
    nodes: IndexMap<NodeId, DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl Diagram {
    pub fn stage(&self) -> StageId {
        self.stage
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Nodes in table order.
    pub fn nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&DiagramNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Identifiers of highlighted nodes, in table order.
    pub fn highlighted_ids(&self) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|node| node.is_highlighted())
            .map(DiagramNode::id)
            .collect()
    }

    /// Edges leaving `id`, in table order.
    pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = &DiagramEdge> {
        self.edges.iter().filter(move |edge| edge.source() == id)
    }

    /// Checks that every edge endpoint is a node of this diagram.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Diagram`] naming the first dangling edge.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        for edge in &self.edges {
            for endpoint in [edge.source(), edge.target()] {
                if !self.contains(endpoint) {
                    return Err(ShowcaseError::Diagram(format!(
                        "edge `{}` of the {} {} diagram references missing node `{endpoint}`",
                        edge.id(),
                        self.stage,
                        self.mode,
                    )));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} view, {} stage", self.mode, self.stage)?;
        for node in self.nodes() {
            let marker = if node.is_highlighted() { "*" } else { " " };
            writeln!(f, "{marker} {} ({})", node.id(), node.label())?;
        }
        for edge in &self.edges {
            writeln!(
                f,
                "  {}: {} -> {} \"{}\"",
                edge.id(),
                edge.source(),
                edge.target(),
                edge.label()
            )?;
        }
        Ok(())
    }
}

/// Derives the diagram for `stage` in `mode` from the static tables.
///
/// Flow view: per-stage node and edge tables. Architecture view: constant
/// nodes and edges, with nodes highlighted when they belong to the stage's
/// highlight list.
pub fn derive(stage: StageId, mode: ViewMode) -> Diagram {
    let (nodes, edges): (IndexMap<_, _>, Vec<_>) = match mode {
        ViewMode::Flow => (
            catalog::flow_nodes(stage)
                .iter()
                .map(|node| (node.id(), *node))
                .collect(),
            catalog::flow_edges(stage).to_vec(),
        ),
        ViewMode::Architecture => {
            let highlighted = catalog::highlighted_nodes(stage);
            (
                catalog::architecture_nodes()
                    .iter()
                    .map(|node| {
                        let is_highlighted = highlighted.contains(&node.id());
                        (node.id(), node.with_highlight(is_highlighted))
                    })
                    .collect(),
                catalog::architecture_edges().to_vec(),
            )
        }
    };

    debug!(
        stage = stage.as_str(),
        mode = mode.as_str(),
        nodes_len = nodes.len(),
        edges_len = edges.len();
        "Diagram derived"
    );

    let diagram = Diagram {
        stage,
        mode,
        nodes,
        edges,
    };
    trace!(diagram:?; "Derived diagram");
    diagram
}
