//! Static narrative tables.
//!
//! Everything the showcase displays is hand-authored and immutable: the three
//! stages, the node and edge tables of both views, and the component detail
//! lookup. Identifiers are closed enums, so an unknown stage or node cannot be
//! represented once parsing at the boundary has succeeded.
//!
//! # Overview
//!
//! - [`StageId`] / [`Stage`] - The ordered stage registry
//! - [`NodeId`] / [`Category`] - Node identifiers and their palette category
//! - [`ComponentDetail`] - Description card for a node category
//! - [`ArchitectureOverview`] - Fixed text shown next to the architecture view

mod architecture;
mod details;
mod flow;
mod stages;

use std::{fmt, str::FromStr};

pub use architecture::{ArchitectureOverview, KeyComponent};
pub use details::ComponentDetail;
pub use stages::Stage;

pub(crate) use architecture::{architecture_edges, architecture_nodes, highlighted_nodes};
pub(crate) use flow::{flow_edges, flow_nodes};

/// Identifier of a narrative stage, in display order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StageId {
    #[default]
    Current,
    Transition,
    Target,
}

impl StageId {
    /// All stages in display order.
    pub const ALL: [StageId; 3] = [Self::Current, Self::Transition, Self::Target];

    /// Returns the identifier used on the command line and in file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Transition => "transition",
            Self::Target => "target",
        }
    }

    /// Returns the label of the stage's stepper button.
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Current => "Current State",
            Self::Transition => "Transition",
            Self::Target => "Target State",
        }
    }

    /// Returns the full stage record.
    pub fn stage(self) -> &'static Stage {
        Stage::get(self)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown stage `{s}` (expected one of: current, transition, target)")
            })
    }
}

/// Returns the stepper tabs: one `(id, label)` pair per stage, in order.
pub fn stage_tabs() -> impl Iterator<Item = (StageId, &'static str)> {
    StageId::ALL.into_iter().map(|id| (id, id.tab_label()))
}

/// Identifier of a diagram node across both views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    // Flow view
    User,
    Waf,
    Profiler,
    App,
    // Architecture view
    IncomingRequest,
    DataPlane,
    D1Database,
    KvStorage,
    Reconciler,
    ControlPlane,
}

impl NodeId {
    pub const ALL: [NodeId; 10] = [
        Self::User,
        Self::Waf,
        Self::Profiler,
        Self::App,
        Self::IncomingRequest,
        Self::DataPlane,
        Self::D1Database,
        Self::KvStorage,
        Self::Reconciler,
        Self::ControlPlane,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Waf => "waf",
            Self::Profiler => "profiler",
            Self::App => "app",
            Self::IncomingRequest => "incomingRequest",
            Self::DataPlane => "dataPlane",
            Self::D1Database => "d1Database",
            Self::KvStorage => "kvStorage",
            Self::Reconciler => "reconciler",
            Self::ControlPlane => "controlPlane",
        }
    }

    /// Returns the identifier in kebab case, used in file names.
    pub fn slug(self) -> String {
        let mut slug = String::new();
        for c in self.as_str().chars() {
            if c.is_ascii_uppercase() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
        }
        slug
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeId {
    type Err = String;

    /// Accepts the camel case identifier as well as kebab or snake case,
    /// ignoring ASCII case: `kvStorage`, `kv-storage` and `KV_STORAGE` all
    /// name the same node.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|id| id.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown node `{s}`"))
    }
}

/// Palette and detail-lookup key of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    User,
    Filter,
    Profiler,
    Application,
    External,
    DataPlane,
    Database,
    Storage,
    Reconciler,
    ControlPlane,
    Processing,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Self::User,
        Self::Filter,
        Self::Profiler,
        Self::Application,
        Self::External,
        Self::DataPlane,
        Self::Database,
        Self::Storage,
        Self::Reconciler,
        Self::ControlPlane,
        Self::Processing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Filter => "filter",
            Self::Profiler => "profiler",
            Self::Application => "application",
            Self::External => "external",
            Self::DataPlane => "dataPlane",
            Self::Database => "database",
            Self::Storage => "storage",
            Self::Reconciler => "reconciler",
            Self::ControlPlane => "controlPlane",
            Self::Processing => "processing",
        }
    }

    /// Returns the card fill and border colors of this category.
    pub fn palette(self) -> Palette {
        match self {
            Self::DataPlane => Palette::new("#EFF6FF", "#93C5FD"),
            Self::Reconciler => Palette::new("#FAF5FF", "#D8B4FE"),
            Self::ControlPlane => Palette::new("#F0FDF4", "#86EFAC"),
            Self::Database => Palette::new("#FFF7ED", "#FDBA74"),
            Self::Storage => Palette::new("#FEF2F2", "#FCA5A5"),
            Self::Processing => Palette::new("#FEFCE8", "#FDE047"),
            Self::External => Palette::new("#F9FAFB", "#D1D5DB"),
            Self::User | Self::Filter | Self::Profiler | Self::Application => {
                Palette::new("#FFFFFF", "#1A192B")
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fill and border color of a node card, as CSS color literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    fill: &'static str,
    border: &'static str,
}

impl Palette {
    const fn new(fill: &'static str, border: &'static str) -> Self {
        Self { fill, border }
    }

    pub fn fill(self) -> &'static str {
        self.fill
    }

    pub fn border(self) -> &'static str {
        self.border
    }
}
