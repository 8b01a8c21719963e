//! UI state and the actions that change it.
//!
//! [`UiState`] is the only mutable value in the showcase. It is owned by the
//! caller and changed exclusively through [`UiState::apply`]; every rendered
//! artifact is derived from it by pure functions.
//!
//! Every transition is total. The state always satisfies one invariant: a
//! selected node is present in the diagram derived from the current stage
//! and mode.
//!
//! ```
//! use showcase::catalog::{NodeId, StageId};
//! use showcase::state::{Action, UiState, ViewMode};
//!
//! let mut state = UiState::new();
//! state.apply(Action::SetMode(ViewMode::Architecture));
//! state.apply(Action::ClickNode(NodeId::Reconciler));
//! assert_eq!(state.selected(), Some(NodeId::Reconciler));
//!
//! state.apply(Action::SelectStage(StageId::Target));
//! assert_eq!(state.selected(), Some(NodeId::Reconciler));
//!
//! state.apply(Action::ToggleMode);
//! assert_eq!(state.selected(), None);
//! ```

use std::{fmt, str::FromStr};

use log::{debug, trace, warn};

use crate::{
    catalog::{NodeId, StageId},
    diagram::{self, Diagram},
};

/// Which diagram is shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Actor-level data flow.
    #[default]
    Flow,
    /// Backend components.
    Architecture,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [Self::Flow, Self::Architecture];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Architecture => "architecture",
        }
    }

    /// Returns the label of the mode's toggle button.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Flow => "User Flow View",
            Self::Architecture => "Backend Architecture",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Flow => Self::Architecture,
            Self::Architecture => Self::Flow,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown view mode `{s}` (expected flow or architecture)"))
    }
}

/// A user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stepper button pressed.
    SelectStage(StageId),
    /// Toggle button pressed.
    SetMode(ViewMode),
    /// Switches to the other mode.
    ToggleMode,
    /// Node card clicked.
    ClickNode(NodeId),
    /// Feature card closed.
    ClosePanel,
}

/// Current stage, view mode and selected node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    stage: StageId,
    mode: ViewMode,
    selected: Option<NodeId>,
}

impl UiState {
    /// Returns the initial state: current stage, flow view, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> StageId {
        self.stage
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Derives the diagram of the current stage and mode.
    pub fn diagram(&self) -> Diagram {
        diagram::derive(self.stage, self.mode)
    }

    /// Applies one action.
    ///
    /// - Changing the mode clears the selection.
    /// - Changing the stage keeps the selection only if the node is still part
    ///   of the newly derived diagram.
    /// - Clicking a node that is not in the current diagram is ignored.
    pub fn apply(&mut self, action: Action) {
        trace!(state:? = self, action:?; "Applying action");

        match action {
            Action::SelectStage(stage) => {
                self.stage = stage;
                self.revalidate_selection();
            }
            Action::SetMode(mode) => {
                if mode != self.mode {
                    self.mode = mode;
                    self.selected = None;
                }
            }
            Action::ToggleMode => {
                self.mode = self.mode.toggled();
                self.selected = None;
            }
            Action::ClickNode(node) => {
                if self.diagram().contains(node) {
                    self.selected = Some(node);
                } else {
                    warn!(
                        node = node.as_str(),
                        stage = self.stage.as_str(),
                        mode = self.mode.as_str();
                        "Ignoring click on a node that is not displayed"
                    );
                }
            }
            Action::ClosePanel => self.selected = None,
        }

        debug!(
            stage = self.stage.as_str(),
            mode = self.mode.as_str(),
            selected:? = self.selected;
            "State updated"
        );
    }

    /// Applies `actions` in order.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    fn revalidate_selection(&mut self) {
        let Some(node) = self.selected else {
            return;
        };
        if !self.diagram().contains(node) {
            debug!(node = node.as_str(); "Selection dropped after stage change");
            self.selected = None;
        }
    }
}
