//! Error types for showcase operations.
//!
//! This module provides [`ShowcaseError`], which wraps every failure the
//! rendering and export pipeline can report. State transitions never fail;
//! errors only arise from configuration, malformed tables, layout and I/O.

use std::io;

use thiserror::Error;

/// The main error type for showcase operations.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Diagram error: {0}")]
    Diagram(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ShowcaseError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export;

    #[test]
    fn test_display_messages() {
        let err = ShowcaseError::Layout("scale must be positive".to_string());
        assert_eq!(err.to_string(), "Layout error: scale must be positive");

        let err = ShowcaseError::Config("invalid color".to_string());
        assert_eq!(err.to_string(), "Configuration error: invalid color");
    }

    #[test]
    fn test_export_error_converts() {
        let err: ShowcaseError = export::Error::Render("no nodes".to_string()).into();
        assert!(matches!(err, ShowcaseError::Export(_)));
        assert_eq!(err.to_string(), "Export error: Render error: no nodes");
    }

    #[test]
    fn test_io_error_converts() {
        let err: ShowcaseError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, ShowcaseError::Io(_)));
    }
}
