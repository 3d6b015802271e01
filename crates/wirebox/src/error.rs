//! Error types for Wirebox operations.
//!
//! This module provides the main error type [`WireboxError`] which wraps
//! the error conditions of the parse and render pipeline.

use std::io;

use thiserror::Error;

use wirebox_parser::error::ScanError;

/// The main error type for Wirebox operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the [`ScanError`], so
/// callers can render the error's diagnostic with a source snippet.
#[derive(Debug, Error)]
pub enum WireboxError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ScanError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for WireboxError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl WireboxError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ScanError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
