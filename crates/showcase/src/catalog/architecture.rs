//! Architecture view tables: backend components, constant across stages.

use super::{Category, NodeId, StageId};
use crate::diagram::{DiagramEdge, DiagramNode, EdgeStyle};

static NODES: [DiagramNode; 6] = [
    DiagramNode::new(
        NodeId::IncomingRequest,
        "Incoming",
        Category::External,
        (10.0, 5.0),
    )
    .with_subtitle("Requests"),
    DiagramNode::new(
        NodeId::DataPlane,
        "Data Plane",
        Category::DataPlane,
        (150.0, 5.0),
    )
    .with_subtitle("Edge Worker"),
    DiagramNode::new(
        NodeId::D1Database,
        "D1 Database",
        Category::Database,
        (310.0, 50.0),
    )
    .with_subtitle("Persistent Storage"),
    DiagramNode::new(
        NodeId::KvStorage,
        "KV Store",
        Category::Storage,
        (300.0, 120.0),
    )
    .with_subtitle("Ephemeral Cache"),
    DiagramNode::new(
        NodeId::Reconciler,
        "Reconciler",
        Category::Reconciler,
        (100.0, 120.0),
    )
    .with_subtitle("Batch Processor"),
    DiagramNode::new(
        NodeId::ControlPlane,
        "Control Plane",
        Category::ControlPlane,
        (450.0, 80.0),
    )
    .with_subtitle("Admin UI/API"),
];

static EDGES: [DiagramEdge; 7] = [
    DiagramEdge::new(
        "e1",
        NodeId::IncomingRequest,
        NodeId::DataPlane,
        "Process",
        EdgeStyle::solid("#3B82F6", 2.0),
    ),
    DiagramEdge::new(
        "e2",
        NodeId::DataPlane,
        NodeId::D1Database,
        "Store Data",
        EdgeStyle::solid("#10B981", 1.5),
    ),
    DiagramEdge::new(
        "e3",
        NodeId::DataPlane,
        NodeId::KvStorage,
        "Cache Raw",
        EdgeStyle::solid("#F59E0B", 1.5),
    ),
    DiagramEdge::new(
        "e4",
        NodeId::KvStorage,
        NodeId::Reconciler,
        "Analyze",
        EdgeStyle::solid("#8B5CF6", 1.5).dashed("3,3"),
    ),
    DiagramEdge::new(
        "e5",
        NodeId::Reconciler,
        NodeId::D1Database,
        "Update",
        EdgeStyle::solid("#8B5CF6", 1.5),
    ),
    DiagramEdge::new(
        "e6",
        NodeId::D1Database,
        NodeId::ControlPlane,
        "Query",
        EdgeStyle::solid("#EF4444", 1.5),
    ),
    DiagramEdge::new(
        "e7",
        NodeId::ControlPlane,
        NodeId::DataPlane,
        "Config",
        EdgeStyle::solid("#EF4444", 1.5).dashed("3,3"),
    ),
];

pub(crate) fn architecture_nodes() -> &'static [DiagramNode] {
    &NODES
}

pub(crate) fn architecture_edges() -> &'static [DiagramEdge] {
    &EDGES
}

/// Components emphasised in the architecture view of `stage`.
pub(crate) fn highlighted_nodes(stage: StageId) -> &'static [NodeId] {
    match stage {
        StageId::Current => &[NodeId::DataPlane, NodeId::D1Database],
        StageId::Transition => &[NodeId::DataPlane, NodeId::KvStorage, NodeId::Reconciler],
        StageId::Target => &[
            NodeId::DataPlane,
            NodeId::Reconciler,
            NodeId::ControlPlane,
            NodeId::D1Database,
            NodeId::KvStorage,
        ],
    }
}

/// A labelled entry of the "Key Components" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyComponent {
    name: &'static str,
    role: &'static str,
}

impl KeyComponent {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn role(&self) -> &'static str {
        self.role
    }
}

/// Fixed text of the detail panel in architecture view.
#[derive(Debug, PartialEq, Eq)]
pub struct ArchitectureOverview {
    title: &'static str,
    introduction: &'static str,
    key_components: &'static [KeyComponent],
    data_flow: &'static str,
}

impl ArchitectureOverview {
    pub fn get() -> &'static ArchitectureOverview {
        &OVERVIEW
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn introduction(&self) -> &'static str {
        self.introduction
    }

    pub fn key_components(&self) -> &'static [KeyComponent] {
        self.key_components
    }

    pub fn data_flow(&self) -> &'static str {
        self.data_flow
    }

    /// Returns the one-line focus of the architecture view for `stage`.
    pub fn focus(stage: StageId) -> &'static str {
        match stage {
            StageId::Current => "Basic data collection and storage components",
            StageId::Transition => "KV storage and reconciler introduced for adaptive learning",
            StageId::Target => "Full adaptive profiling pipeline with control plane",
        }
    }
}

static OVERVIEW: ArchitectureOverview = ArchitectureOverview {
    title: "Backend Architecture Overview",
    introduction: "This diagram shows the backend architecture of the Adaptive Profiling \
        system, built with Cloudflare Workers, D1 Database, and KV storage.",
    key_components: &[
        KeyComponent {
            name: "Data Plane",
            role: "Processes incoming requests in real-time",
        },
        KeyComponent {
            name: "Reconciler",
            role: "Batch processes data and updates insights",
        },
        KeyComponent {
            name: "Control Plane",
            role: "Provides management interface and APIs",
        },
        KeyComponent {
            name: "D1 Database",
            role: "Persistent storage for profiling data",
        },
        KeyComponent {
            name: "KV Storage",
            role: "Ephemeral cache for raw observations",
        },
    ],
    data_flow: "Requests flow through the Data Plane, which stores data in both D1 and KV. \
        The Reconciler processes KV data to update D1 with insights, and the Control Plane \
        queries D1 to display analytics.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_are_architecture_nodes() {
        for stage in StageId::ALL {
            for id in highlighted_nodes(stage) {
                assert!(NODES.iter().any(|node| node.id() == *id), "{id}");
            }
        }
    }

    #[test]
    fn test_every_node_has_subtitle() {
        assert!(NODES.iter().all(|node| node.subtitle().is_some()));
    }

    #[test]
    fn test_overview_text() {
        let overview = ArchitectureOverview::get();
        assert_eq!(overview.title(), "Backend Architecture Overview");
        assert_eq!(overview.key_components().len(), 5);
        assert_eq!(overview.key_components()[1].name(), "Reconciler");
        assert_eq!(
            ArchitectureOverview::focus(StageId::Transition),
            "KV storage and reconciler introduced for adaptive learning"
        );
    }
}
