//! Command-line argument definitions for the showcase CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the configuration file and logging
//! verbosity; each subcommand carries its own state and output options.

use clap::{Parser, Subcommand};

use showcase::{
    catalog::{NodeId, StageId},
    state::ViewMode,
};

/// Command-line arguments for the adaptive profiling showcase
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one view to an SVG file
    Render(RenderArgs),

    /// Print the detail panel of one view as plain text
    Describe(StateArgs),

    /// Export every view plus an index page
    Site(SiteArgs),
}

/// Actions applied to the initial state, in the order mode, stage, select, close.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct StateArgs {
    /// View mode (flow, architecture)
    #[arg(long)]
    pub mode: Option<ViewMode>,

    /// Stage (current, transition, target)
    #[arg(long)]
    pub stage: Option<StageId>,

    /// Node to select, e.g. `reconciler` or `kv-storage`
    #[arg(long)]
    pub select: Option<NodeId>,

    /// Close the feature card after selecting
    #[arg(long)]
    pub close: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub state: StateArgs,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SiteArgs {
    /// Output directory
    #[arg(short, long, default_value = "site")]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_with_state() {
        let args = Args::try_parse_from([
            "showcase",
            "render",
            "--mode",
            "architecture",
            "--stage",
            "target",
            "--select",
            "kv-storage",
            "-o",
            "view.svg",
        ])
        .unwrap();

        let Command::Render(render) = args.command else {
            panic!("expected render command");
        };
        assert_eq!(render.state.mode, Some(ViewMode::Architecture));
        assert_eq!(render.state.stage, Some(StageId::Target));
        assert_eq!(render.state.select, Some(NodeId::KvStorage));
        assert!(!render.state.close);
        assert_eq!(render.output, "view.svg");
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let argv = ["showcase", "site", "-c", "c.toml", "--log-level", "off"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.config.as_deref(), Some("c.toml"));
        assert_eq!(args.log_level, "off");
        let Command::Site(site) = args.command else {
            panic!("expected site command");
        };
        assert_eq!(site.output, "site");
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!(Args::try_parse_from(["showcase", "render", "--stage", "later"]).is_err());
        assert!(Args::try_parse_from(["showcase", "describe", "--select", "nope"]).is_err());
        assert!(Args::try_parse_from(["showcase", "describe", "--mode", "graph"]).is_err());
    }
}
