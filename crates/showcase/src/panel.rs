//! Detail panel derivation.
//!
//! The detail panel is what sits next to the diagram: the stage narrative in
//! flow view, the architecture overview in architecture view, and, when a node
//! is selected, a feature card describing it. [`DetailPanel::derive`] builds it
//! from a [`UiState`]. Each part flattens into [`Block`]s, which both the SVG
//! renderer and the plain-text [`fmt::Display`] output walk.

use std::fmt;

use crate::{
    catalog::{ArchitectureOverview, ComponentDetail, NodeId, Stage},
    state::{UiState, ViewMode},
};

const SELECTION_HINT: &str = "Click different components to learn about their roles";

/// A unit of panel content, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Title(&'a str),
    Heading(&'a str),
    Paragraph(&'a str),
    /// A list item with an optional bold lead-in.
    Bullet {
        lead: Option<&'a str>,
        text: &'a str,
    },
    /// A checked feature line.
    Check(&'a str),
    /// Technology chips.
    Tags(&'a [&'a str]),
    /// A framed note with its own heading.
    Note { heading: &'a str, text: &'a str },
    /// Small print under the text it annotates.
    Caption(&'a str),
}

/// Left-hand part of the panel, independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Flow view: the stage narrative.
    Stage(&'static Stage),
    /// Architecture view: the fixed overview plus the stage's focus line.
    Architecture {
        overview: &'static ArchitectureOverview,
        focus: &'static str,
    },
}

impl Summary {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Stage(stage) => stage.title(),
            Self::Architecture { overview, .. } => overview.title(),
        }
    }

    /// Blocks of the summary, in reading order.
    pub fn blocks(&self) -> Vec<Block<'static>> {
        match *self {
            Self::Stage(stage) => {
                let mut blocks = vec![
                    Block::Title(stage.title()),
                    Block::Paragraph(stage.description()),
                    Block::Heading("Business Impact"),
                    Block::Paragraph(stage.business_impact()),
                    Block::Heading("Risks"),
                ];
                blocks.extend(
                    stage
                        .risks()
                        .iter()
                        .copied()
                        .map(|text| Block::Bullet { lead: None, text }),
                );
                blocks.push(Block::Heading("Benefits"));
                blocks.extend(
                    stage
                        .benefits()
                        .iter()
                        .copied()
                        .map(|text| Block::Bullet { lead: None, text }),
                );
                blocks
            }
            Self::Architecture { overview, focus } => {
                let mut blocks = vec![
                    Block::Title(overview.title()),
                    Block::Paragraph(overview.introduction()),
                    Block::Heading("Key Components:"),
                ];
                blocks.extend(overview.key_components().iter().map(|component| {
                    Block::Bullet {
                        lead: Some(component.name()),
                        text: component.role(),
                    }
                }));
                blocks.push(Block::Heading("Data Flow:"));
                blocks.push(Block::Paragraph(overview.data_flow()));
                blocks.push(Block::Note {
                    heading: "Architecture Focus:",
                    text: focus,
                });
                blocks
            }
        }
    }
}

/// Description of the selected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    node: NodeId,
    header: String,
    subtitle: Option<&'static str>,
    detail: ComponentDetail,
}

impl FeatureCard {
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// `"Selected: <label>"`.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        self.subtitle
    }

    pub fn detail(&self) -> &ComponentDetail {
        &self.detail
    }

    /// Blocks of the selection box shown at the top of the detail panel.
    pub fn selection_blocks(&self) -> Vec<Block<'_>> {
        let mut blocks = vec![Block::Heading(&self.header)];
        if let Some(subtitle) = self.subtitle {
            blocks.push(Block::Paragraph(subtitle));
        }
        blocks.push(Block::Caption(SELECTION_HINT));
        blocks
    }

    /// Blocks of the overlay card drawn over the diagram.
    pub fn detail_blocks(&self) -> Vec<Block<'static>> {
        let detail = self.detail;
        let mut blocks = vec![
            Block::Title(detail.title()),
            Block::Paragraph(detail.description()),
            Block::Heading("Key Features:"),
        ];
        blocks.extend(detail.features().iter().copied().map(Block::Check));
        blocks.push(Block::Heading("Technology:"));
        blocks.push(Block::Tags(detail.tech()));
        blocks
    }
}

/// Everything shown beside and over the diagram for one UI state.
///
/// ```
/// use showcase::catalog::NodeId;
/// use showcase::panel::DetailPanel;
/// use showcase::state::{Action, UiState, ViewMode};
///
/// let mut state = UiState::new();
/// state.apply(Action::SetMode(ViewMode::Architecture));
/// state.apply(Action::ClickNode(NodeId::Reconciler));
///
/// let panel = DetailPanel::derive(&state);
/// let card = panel.feature().unwrap();
/// assert_eq!(card.header(), "Selected: Reconciler");
/// assert_eq!(card.detail().title(), "Data Reconciler Worker");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    summary: Summary,
    feature: Option<FeatureCard>,
}

impl DetailPanel {
    /// Derives the panel of `state`.
    pub fn derive(state: &UiState) -> Self {
        let summary = match state.mode() {
            ViewMode::Flow => Summary::Stage(state.stage().stage()),
            ViewMode::Architecture => Summary::Architecture {
                overview: ArchitectureOverview::get(),
                focus: ArchitectureOverview::focus(state.stage()),
            },
        };

        let feature = state.selected().and_then(|id| {
            let diagram = state.diagram();
            let node = diagram.node(id)?;
            Some(FeatureCard {
                node: id,
                header: format!("Selected: {}", node.label()),
                subtitle: node.subtitle(),
                detail: ComponentDetail::resolve(node.category(), node.label()),
            })
        });

        Self { summary, feature }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn feature(&self) -> Option<&FeatureCard> {
        self.feature.as_ref()
    }
}

impl fmt::Display for DetailPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blocks(f, &self.summary.blocks())?;

        if let Some(feature) = &self.feature {
            writeln!(f)?;
            write_blocks(f, &feature.selection_blocks())?;
            writeln!(f)?;
            write_blocks(f, &feature.detail_blocks())?;
        }
        Ok(())
    }
}

fn write_blocks(f: &mut fmt::Formatter<'_>, blocks: &[Block<'_>]) -> fmt::Result {
    for (index, block) in blocks.iter().enumerate() {
        let starts_section = matches!(block, Block::Heading(_) | Block::Note { .. });
        if index > 0 && starts_section {
            writeln!(f)?;
        }
        match block {
            Block::Title(text) => {
                writeln!(f, "{text}")?;
                writeln!(f, "{}", "=".repeat(text.chars().count()))?;
            }
            Block::Heading(text) | Block::Paragraph(text) | Block::Caption(text) => {
                writeln!(f, "{text}")?
            }
            Block::Bullet {
                lead: Some(lead),
                text,
            } => writeln!(f, "- {lead}: {text}")?,
            Block::Bullet { lead: None, text } => writeln!(f, "- {text}")?,
            Block::Check(text) => writeln!(f, "[x] {text}")?,
            Block::Tags(tags) => writeln!(f, "{}", tags.join(", "))?,
            Block::Note { heading, text } => {
                writeln!(f, "{heading}")?;
                writeln!(f, "  {text}")?;
            }
        }
    }
    Ok(())
}
