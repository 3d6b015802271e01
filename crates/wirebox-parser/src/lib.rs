//! # Wirebox Parser
//!
//! Scanner and extractor for the Wirebox bracket notation. This crate turns
//! `.blk` source text into a [`Block`] tree whose blocks carry their grid
//! cell and extracted color, text and tags.
//!
//! ## Usage
//!
//! ```
//! # use wirebox_parser::{parse, error::ScanError};
//!
//! fn main() -> Result<(), ScanError> {
//!     let source = "[lightgray: Frame\n    [White: Message text]\n]\n";
//!
//!     let parsed = parse(source)?;
//!     assert_eq!(parsed.root.text(), "Frame");
//!     assert_eq!(parsed.root.children()[0].cell().row(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extract;
mod line_index;
mod scanner;
mod span;

pub use line_index::LineIndex;
pub use scanner::{
    DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, ScanEvent, ScanOptions, Scanned, Scanner, State,
    Termination,
};
pub use span::Span;

use log::{debug, info};

use wirebox_core::block::Block;

use error::{Diagnostic, ScanError};

/// A parsed document.
#[derive(Debug, Clone)]
pub struct Parsed {
    /// The outermost block with content extracted.
    pub root: Block,
    /// Offset at which scanning stopped.
    pub end_offset: usize,
    /// How scanning ended.
    pub termination: Termination,
    /// Non-fatal findings, in source order.
    pub warnings: Vec<Diagnostic>,
}

impl Parsed {
    /// Returns `true` if the input ended inside an open block.
    pub fn is_truncated(&self) -> bool {
        matches!(self.termination, Termination::Truncated { .. })
    }
}

/// Parses source text with default options.
///
/// Runs the two parsing phases:
///
/// 1. **Scan** - Build the block tree and assign cells
/// 2. **Extract** - Split every raw body into color, text and tags
///
/// Truncated input is not an error; see [`Parsed::termination`].
pub fn parse(source: &str) -> Result<Parsed, ScanError> {
    parse_with(source, ScanOptions::default())
}

/// Parses source text with explicit scan options.
pub fn parse_with(source: &str, options: ScanOptions) -> Result<Parsed, ScanError> {
    // Step 1: Scan
    let scanned = Scanner::new(source, options).scan()?;

    // Step 2: Extract
    let mut root = scanned.block;
    let warnings = extract::extract_tree(&mut root);

    info!(
        blocks = root.iter().count(),
        warnings = warnings.len();
        "Parsed document"
    );
    debug!(termination:? = scanned.termination; "Scan termination");

    Ok(Parsed {
        root,
        end_offset: scanned.end_offset,
        termination: scanned.termination,
        warnings,
    })
}
