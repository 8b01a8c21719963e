//! CLI logic for the adaptive profiling showcase.
//!
//! [`run`] loads the configuration, builds the requested [`UiState`] and
//! renders it, describes it, or exports the whole static site.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, RenderArgs, SiteArgs, StateArgs};

use std::{
    io::{self, Write},
    path::Path,
};

use log::{debug, info};
use thiserror::Error;

use showcase::{
    Showcase, ShowcaseError,
    catalog::{NodeId, StageId},
    site::SiteBuilder,
    state::{Action, UiState, ViewMode},
};

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Showcase(#[from] ShowcaseError),

    #[error("node `{node}` is not shown in the {mode} view at the {stage} stage")]
    NodeNotInView {
        node: NodeId,
        mode: ViewMode,
        stage: StageId,
        /// Comma-separated ids of the nodes that are shown.
        available: String,
    },
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Showcase(ShowcaseError::Io(err))
    }
}

/// Run the showcase CLI application, printing text output to stdout.
///
/// # Errors
///
/// Returns [`CliError::Showcase`] for configuration, layout, rendering and
/// I/O failures, and [`CliError::NodeNotInView`] if `--select` names a node
/// the requested view does not show.
pub fn run(args: &Args) -> Result<(), CliError> {
    run_with_output(args, &mut io::stdout().lock())
}

/// Same as [`run`], writing text output to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let showcase = Showcase::new(app_config);

    match &args.command {
        Command::Render(render) => {
            let state = build_state(&render.state)?;
            info!(output_path = render.output; "Rendering view");
            showcase.write_svg(&state, Path::new(&render.output))?;
            info!(output_file = render.output; "SVG exported successfully");
        }
        Command::Describe(state_args) => {
            let state = build_state(state_args)?;
            write!(out, "{}", showcase.describe(&state))?;
        }
        Command::Site(site) => {
            let manifest = SiteBuilder::new(&showcase).build(Path::new(&site.output))?;
            info!(
                output_dir = site.output,
                files_len = manifest.files().count();
                "Site exported successfully"
            );
        }
    }

    Ok(())
}

/// Builds the state described by `args`: mode, then stage, then selection,
/// then close.
///
/// # Errors
///
/// Returns [`CliError::NodeNotInView`] if the selected node is not part of
/// the diagram after the mode and stage are applied.
pub fn build_state(args: &StateArgs) -> Result<UiState, CliError> {
    let mut state = UiState::new();

    if let Some(mode) = args.mode {
        state.apply(Action::SetMode(mode));
    }
    if let Some(stage) = args.stage {
        state.apply(Action::SelectStage(stage));
    }
    if let Some(node) = args.select {
        let diagram = state.diagram();
        if !diagram.contains(node) {
            let available = diagram
                .nodes()
                .map(|node| node.id().as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CliError::NodeNotInView {
                node,
                mode: state.mode(),
                stage: state.stage(),
                available,
            });
        }
        state.apply(Action::ClickNode(node));
    }
    if args.close {
        state.apply(Action::ClosePanel);
    }

    debug!(
        mode = state.mode().as_str(),
        stage = state.stage().as_str(),
        selected:? = state.selected();
        "State built"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_defaults_to_initial() {
        assert_eq!(build_state(&StateArgs::default()).unwrap(), UiState::new());
    }

    #[test]
    fn test_build_state_applies_in_order() {
        let args = StateArgs {
            mode: Some(ViewMode::Architecture),
            stage: Some(StageId::Transition),
            select: Some(NodeId::Reconciler),
            close: false,
        };
        let state = build_state(&args).unwrap();
        assert_eq!(state.mode(), ViewMode::Architecture);
        assert_eq!(state.stage(), StageId::Transition);
        assert_eq!(state.selected(), Some(NodeId::Reconciler));

        let state = build_state(&StateArgs {
            close: true,
            ..args
        })
        .unwrap();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_select_outside_view_is_error() {
        let args = StateArgs {
            stage: Some(StageId::Transition),
            select: Some(NodeId::App),
            ..StateArgs::default()
        };
        let err = build_state(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::NodeNotInView {
                node: NodeId::App,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "node `app` is not shown in the flow view at the transition stage"
        );
    }
}
