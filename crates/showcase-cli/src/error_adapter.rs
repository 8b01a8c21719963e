//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's graphical report formatting used in the CLI. Showcase errors
//! carry no source spans, so each error becomes one diagnostic with a code
//! and, where a fix is obvious, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use showcase::ShowcaseError;

use crate::CliError;

/// Adapter presenting a [`CliError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            CliError::Showcase(ShowcaseError::Io(err)) => Some(err),
            _ => None,
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Showcase(ShowcaseError::Io(_)) => "showcase::io",
            CliError::Showcase(ShowcaseError::Config(_)) => "showcase::config",
            CliError::Showcase(ShowcaseError::Diagram(_)) => "showcase::diagram",
            CliError::Showcase(ShowcaseError::Layout(_)) => "showcase::layout",
            CliError::Showcase(ShowcaseError::Export(_)) => "showcase::export",
            CliError::NodeNotInView { .. } => "showcase::selection",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: Box<dyn fmt::Display + 'a> = match self.0 {
            CliError::Showcase(ShowcaseError::Config(_)) => Box::new(
                "check the [layout], [style] and [site] sections of the configuration file",
            ),
            CliError::Showcase(ShowcaseError::Layout(_)) => {
                Box::new("`layout.flow_scale` and `layout.architecture_scale` must be positive")
            }
            CliError::NodeNotInView { available, .. } => {
                Box::new(format!("nodes in this view: {available}"))
            }
            _ => return None,
        };
        Some(help)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`CliError`] into the list of reportable errors.
pub fn to_reportables(err: &CliError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
