//! Export of rendered views.
//!
//! This module provides the [`Exporter`] trait, the last stage of the
//! rendering pipeline:
//!
//! ```text
//! UiState
//!     ↓ derive
//! Diagram + DetailPanel
//!     ↓ layout
//! DiagramLayout
//!     ↓ export (this module)
//! SVG document / file
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`ShowcaseError::Export`] at the crate
//! boundary.
//!
//! [`ShowcaseError::Export`]: crate::ShowcaseError::Export

pub mod svg;

use std::path::Path;

use crate::{diagram::Diagram, layout::DiagramLayout, panel::DetailPanel, state::UiState};

/// Everything needed to draw one UI state.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    state: &'a UiState,
    diagram: &'a Diagram,
    layout: &'a DiagramLayout,
    panel: &'a DetailPanel,
}

impl<'a> View<'a> {
    pub fn new(
        state: &'a UiState,
        diagram: &'a Diagram,
        layout: &'a DiagramLayout,
        panel: &'a DetailPanel,
    ) -> Self {
        Self {
            state,
            diagram,
            layout,
            panel,
        }
    }

    pub fn state(&self) -> &'a UiState {
        self.state
    }

    pub fn diagram(&self) -> &'a Diagram {
        self.diagram
    }

    pub fn layout(&self) -> &'a DiagramLayout {
        self.layout
    }

    pub fn panel(&self) -> &'a DetailPanel {
        self.panel
    }
}

/// Abstraction for view export backends.
pub trait Exporter {
    /// Renders `view` and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the view cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_view(&self, view: &View<'_>, path: &Path) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
