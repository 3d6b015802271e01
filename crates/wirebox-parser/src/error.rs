//! Error and diagnostic system for the Wirebox parser.
//!
//! This module provides:
//! - [`ScanError`], the structured failure returned by the scanner
//! - Error codes for documentation and searchability
//! - Labeled spans and severity levels for rich rendering
//!
//! # Overview
//!
//! Scanner failures are plain data ([`ScanError`]) carrying the offset, the
//! scanner state and the 1-based source line. For presentation they convert
//! into a [`Diagnostic`], which holds an optional error code, labelled source
//! spans and help text. Non-fatal findings, such as a block body that does
//! not follow the `color: text` form, are reported as warning diagnostics.
//!
//! # Example
//!
//! ```
//! # use wirebox_parser::error::{Diagnostic, ErrorCode};
//! # use wirebox_parser::Span;
//!
//! let diag = Diagnostic::error("unexpected character 'x'")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(4..5), "not allowed before the first block")
//!     .with_help("wrap the content in `[ ... ]`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod scan_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use scan_error::ScanError;
pub use severity::Severity;
