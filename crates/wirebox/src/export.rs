//! Export functionality for Wirebox diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a projected grid into an output format. It is the final stage
//! in the Wirebox processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ scan + extract
//! Block Tree
//!     ↓ project
//! Grid
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`WireboxError::Export`] at the crate
//! boundary.
//!
//! [`WireboxError::Export`]: crate::WireboxError::Export

/// SVG export backend.
pub mod svg;

use std::io::Write;

use wirebox_core::grid::Grid;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Writes `grid` to `out` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the grid cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_grid(&mut self, grid: &Grid, out: &mut dyn Write) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
///
/// This type is converted into [`WireboxError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`WireboxError::Export`]: crate::WireboxError::Export
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
