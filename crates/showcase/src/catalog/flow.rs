//! Flow view tables: actor-level traffic per stage.

use super::{Category, NodeId, StageId};
use crate::diagram::{DiagramEdge, DiagramNode, EdgeStyle};

const USER: DiagramNode = DiagramNode::new(NodeId::User, "User", Category::User, (0.0, 100.0));
const WAF: DiagramNode = DiagramNode::new(
    NodeId::Waf,
    "WAF (Signatures)",
    Category::Filter,
    (250.0, 100.0),
);
const PROFILER: DiagramNode = DiagramNode::new(
    NodeId::Profiler,
    "Adaptive Profiler",
    Category::Profiler,
    (250.0, 250.0),
);
const APP: DiagramNode = DiagramNode::new(
    NodeId::App,
    "Application",
    Category::Application,
    (600.0, 100.0),
);

const TRAFFIC: DiagramEdge = DiagramEdge::new(
    "e1",
    NodeId::User,
    NodeId::Waf,
    "Traffic",
    EdgeStyle::solid("green", 3.0),
);
const TELEMETRY: DiagramEdge = DiagramEdge::new(
    "e3",
    NodeId::Waf,
    NodeId::Profiler,
    "Telemetry feed",
    EdgeStyle::solid("purple", 3.0).dashed("3,3"),
);

static CURRENT_NODES: [DiagramNode; 3] = [USER, WAF, APP];
static CURRENT_EDGES: [DiagramEdge; 2] = [
    TRAFFIC,
    DiagramEdge::new(
        "e2",
        NodeId::Waf,
        NodeId::App,
        "Filtered by signatures",
        EdgeStyle::solid("green", 3.0),
    ),
];

// The application is hidden while the profiler is introduced, so partial
// enforcement points at the profiler.
static TRANSITION_NODES: [DiagramNode; 3] = [USER, WAF, PROFILER];
static TRANSITION_EDGES: [DiagramEdge; 3] = [
    TRAFFIC,
    DiagramEdge::new(
        "e2",
        NodeId::Waf,
        NodeId::Profiler,
        "Partially enforced",
        EdgeStyle::solid("orange", 3.0).dashed("5,5").curved(),
    ),
    TELEMETRY,
];

static TARGET_NODES: [DiagramNode; 4] = [USER, WAF, PROFILER, APP];
static TARGET_EDGES: [DiagramEdge; 4] = [
    TRAFFIC,
    DiagramEdge::new(
        "e2",
        NodeId::Waf,
        NodeId::App,
        "Filtered by signatures + Adaptive Profile",
        EdgeStyle::solid("green", 3.0),
    ),
    TELEMETRY,
    DiagramEdge::new(
        "e4",
        NodeId::Profiler,
        NodeId::Waf,
        "Feedback / Adaptive rules",
        EdgeStyle::solid("blue", 3.0).dashed("3,3").curved(),
    ),
];

pub(crate) fn flow_nodes(stage: StageId) -> &'static [DiagramNode] {
    match stage {
        StageId::Current => &CURRENT_NODES,
        StageId::Transition => &TRANSITION_NODES,
        StageId::Target => &TARGET_NODES,
    }
}

pub(crate) fn flow_edges(stage: StageId) -> &'static [DiagramEdge] {
    match stage {
        StageId::Current => &CURRENT_EDGES,
        StageId::Transition => &TRANSITION_EDGES,
        StageId::Target => &TARGET_EDGES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[DiagramNode]) -> Vec<NodeId> {
        nodes.iter().map(DiagramNode::id).collect()
    }

    #[test]
    fn test_node_sets_per_stage() {
        assert_eq!(
            ids(flow_nodes(StageId::Current)),
            vec![NodeId::User, NodeId::Waf, NodeId::App]
        );
        assert_eq!(
            ids(flow_nodes(StageId::Transition)),
            vec![NodeId::User, NodeId::Waf, NodeId::Profiler]
        );
        assert_eq!(flow_nodes(StageId::Target).len(), 4);
    }

    #[test]
    fn test_edge_ids_are_unique_per_stage() {
        for stage in StageId::ALL {
            let mut edge_ids: Vec<_> = flow_edges(stage).iter().map(DiagramEdge::id).collect();
            edge_ids.sort_unstable();
            edge_ids.dedup();
            assert_eq!(edge_ids.len(), flow_edges(stage).len());
        }
    }

    #[test]
    fn test_partial_enforcement_targets_profiler() {
        let edge = flow_edges(StageId::Transition)
            .iter()
            .find(|e| e.label() == "Partially enforced")
            .unwrap();
        assert_eq!(edge.target(), NodeId::Profiler);
        assert_eq!(edge.style().dash(), Some("5,5"));
        assert_eq!(edge.style().color(), "orange");
    }
}
