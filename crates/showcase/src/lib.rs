//! Showcase - an interactive walkthrough of a WAF's move to adaptive profiling.
//!
//! The narrative has three stages and two views of the system. A [`UiState`]
//! records which stage and view are shown and which node is selected; every
//! other piece of the page is derived from it:
//!
//! ```text
//! UiState --derive--> Diagram --layout--> DiagramLayout --+
//!    |                                                     +--> SVG
//!    +--derive--> DetailPanel -----------------------------+
//! ```
//!
//! [`Showcase`] runs that pipeline with an [`AppConfig`].
//!
//! [`UiState`]: state::UiState
//! [`AppConfig`]: config::AppConfig

pub mod catalog;
pub mod config;
pub mod diagram;
pub mod export;
pub mod layout;
pub mod panel;
pub mod site;
pub mod state;

mod error;

pub use showcase_core::{color, draw, geometry};

pub use error::ShowcaseError;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, View, svg::Svg};
use layout::DiagramLayout;
use panel::DetailPanel;
use state::{UiState, ViewMode};

/// Renders showcase views.
///
/// # Examples
///
/// ```rust,no_run
/// use showcase::Showcase;
/// use showcase::catalog::{NodeId, StageId};
/// use showcase::state::{Action, UiState, ViewMode};
///
/// let mut state = UiState::new();
/// state.apply_all([
///     Action::SetMode(ViewMode::Architecture),
///     Action::SelectStage(StageId::Target),
///     Action::ClickNode(NodeId::ControlPlane),
/// ]);
///
/// let showcase = Showcase::default();
/// let svg = showcase.render_svg(&state).expect("Failed to render");
/// assert!(svg.contains("data-node=\"controlPlane\""));
/// ```
#[derive(Debug, Default)]
pub struct Showcase {
    config: AppConfig,
}

impl Showcase {
    /// Creates a showcase renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Renders `state` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError`] if the configuration is invalid, the derived
    /// diagram is inconsistent, the layout fails, or rendering fails.
    pub fn render_svg(&self, state: &UiState) -> Result<String, ShowcaseError> {
        info!(mode:% = state.mode(), stage:% = state.stage(); "Rendering view");
        let svg = self.with_view(state, |svg, view| svg.render_to_string(view))?;
        info!(bytes_len = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Renders `state` and writes the SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Showcase::render_svg`], plus [`ShowcaseError::Export`] if
    /// the file cannot be written.
    pub fn write_svg(&self, state: &UiState, path: &Path) -> Result<(), ShowcaseError> {
        info!(mode:% = state.mode(), stage:% = state.stage(), path:? = path; "Writing view");
        self.with_view(state, |svg, view| svg.export_view(view, path))
    }

    /// Returns the detail panel of `state` as plain text.
    pub fn describe(&self, state: &UiState) -> String {
        DetailPanel::derive(state).to_string()
    }

    /// Scale applied to position hints in `mode`.
    pub fn scale(&self, mode: ViewMode) -> f32 {
        match mode {
            ViewMode::Flow => self.config.layout().flow_scale(),
            ViewMode::Architecture => self.config.layout().architecture_scale(),
        }
    }

    /// Builds the renderer and the view of `state`, then hands both to `render`.
    fn with_view<T>(
        &self,
        state: &UiState,
        render: impl FnOnce(&Svg, &View<'_>) -> Result<T, export::Error>,
    ) -> Result<T, ShowcaseError> {
        self.config.validate()?;
        let svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_layout(self.config.layout())
            .with_title(self.config.site().title())
            .build()?;

        let diagram = state.diagram();
        diagram.validate()?;
        trace!(diagram:% = diagram; "Diagram derived");

        let panel = DetailPanel::derive(state);
        let scale = self.scale(state.mode());
        let layout = DiagramLayout::compute(&diagram, scale, |node| svg.card_size(node))?;
        debug!(
            nodes_len = diagram.node_count(),
            edges_len = diagram.edges().len(),
            selected:? = state.selected();
            "View prepared"
        );

        let view = View::new(state, &diagram, &layout, &panel);
        Ok(render(&svg, &view)?)
    }
}
