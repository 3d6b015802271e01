//! Wirebox - schematic wireframes from a bracket notation.
//!
//! Parsing, grid projection and SVG rendering for `.blk` documents, in which
//! nested `[color: text]` blocks describe rectangular UI regions.

pub mod color;
pub mod config;

mod error;
pub mod export;

pub use wirebox_core::{block, cell, grid, tag};

pub use error::WireboxError;

use log::{debug, info, trace};

use wirebox_core::{block::Block, grid::Grid};
use wirebox_parser::{Termination, error::Diagnostic};

use config::AppConfig;
use export::Exporter;

/// A parsed document: the block tree and the warnings found while
/// extracting block content.
#[derive(Debug, Clone)]
pub struct Diagram {
    root: Block,
    termination: Termination,
    warnings: Vec<Diagnostic>,
}

impl Diagram {
    /// Returns the outermost block.
    pub fn root(&self) -> &Block {
        &self.root
    }

    /// Returns how scanning ended.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns `true` if the document ended inside an open block.
    pub fn is_truncated(&self) -> bool {
        matches!(self.termination, Termination::Truncated { .. })
    }

    /// Returns the extraction warnings in source order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// Builder for parsing and rendering Wirebox diagrams.
///
/// This provides an API for processing Wirebox documents through parsing,
/// projection, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use wirebox::{DiagramBuilder, config::AppConfig};
///
/// let source = "[lightgray: Frame\n    [White: Message text]\n]\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to a block tree
/// let diagram = builder.parse(source).expect("Failed to parse");
///
/// // Project the tree onto a grid
/// let grid = builder.project(&diagram);
/// assert_eq!(grid.rows().len(), 2);
///
/// // Render the grid to SVG
/// let svg = builder.render_svg(&grid).expect("Failed to render");
/// assert!(svg.contains("Message text"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including parser and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a block tree.
    ///
    /// This scans the document, assigns grid cells and extracts each block's
    /// color, text and tags.
    ///
    /// # Errors
    ///
    /// Returns `WireboxError::Parse` for malformed documents, and in strict
    /// mode for truncated or empty ones.
    pub fn parse(&self, source: &str) -> Result<Diagram, WireboxError> {
        info!("Parsing document");

        let parsed = wirebox_parser::parse_with(source, self.config.parser().scan_options())
            .map_err(|err| WireboxError::new_parse_error(err, source))?;

        debug!(
            warnings = parsed.warnings.len(),
            termination:? = parsed.termination;
            "Document parsed successfully"
        );
        trace!(root:? = parsed.root; "Parsed tree");

        Ok(Diagram {
            root: parsed.root,
            termination: parsed.termination,
            warnings: parsed.warnings,
        })
    }

    /// Project a parsed diagram onto a dense grid.
    pub fn project(&self, diagram: &Diagram) -> Grid {
        let grid = wirebox_core::grid::project(diagram.root());
        let size = grid.size();
        info!(rows = size.rows, columns = size.columns; "Grid projected");
        grid
    }

    /// Render a grid to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `WireboxError::Export` if the configured style is invalid.
    pub fn render_svg(&self, grid: &Grid) -> Result<String, WireboxError> {
        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;

        let mut buffer = Vec::new();
        svg_exporter.export_grid(grid, &mut buffer)?;

        let svg = String::from_utf8(buffer)
            .map_err(|err| WireboxError::from(export::Error::Render(err.to_string())))?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
