//! Configuration types for Wirebox parsing and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default, so a partial file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining parser and style settings.
//! - [`ParserConfig`] - Nesting limit and strict mode for the scanner.
//! - [`StyleConfig`] - Colors and cell geometry for SVG output.
//!
//! # Example
//!
//! ```
//! # use wirebox::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.parser().max_depth(), 64);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use wirebox_parser::{DEFAULT_MAX_DEPTH, ScanOptions};

use crate::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(parser: ParserConfig, style: StyleConfig) -> Self {
        Self { parser, style }
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Scanner settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest block nesting accepted.
    max_depth: usize,

    /// Reject truncated or empty documents.
    strict: bool,
}

impl ParserConfig {
    /// Creates a new [`ParserConfig`].
    pub fn new(max_depth: usize, strict: bool) -> Self {
        Self { max_depth, strict }
    }

    /// Returns the nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if strict mode is enabled.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Returns a copy with strict mode set.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Converts the settings into scanner options.
    ///
    /// The nesting limit is clamped to
    /// [`MAX_DEPTH_CEILING`](wirebox_parser::MAX_DEPTH_CEILING).
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_max_depth(self.max_depth)
            .with_strict(self.strict)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Sizes are in SVG user units; the output is scaled by `scale` for its
/// physical width and height.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill of the diagram background.
    background_color: String,

    /// Fill of cells without a color.
    placeholder_fill: String,

    /// Outline color of cells with text.
    stroke_color: String,

    rect_width: u32,
    rect_height: u32,
    font_size: u32,
    stroke_thickness: u32,
    scale: u32,

    /// Stretch the only node of a row across the full diagram width.
    stretch_single_node_rows: bool,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed placeholder fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn placeholder_fill(&self) -> Result<Color, String> {
        Color::new(&self.placeholder_fill)
            .map_err(|err| format!("Invalid placeholder fill in config: {err}"))
    }

    /// Returns the parsed stroke [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn stroke_color(&self) -> Result<Color, String> {
        Color::new(&self.stroke_color)
            .map_err(|err| format!("Invalid stroke color in config: {err}"))
    }

    /// Returns the cell width.
    pub fn rect_width(&self) -> u32 {
        self.rect_width
    }

    /// Returns the cell height.
    pub fn rect_height(&self) -> u32 {
        self.rect_height
    }

    /// Returns the font size.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Returns the stroke thickness, which is also the gap around each cell.
    pub fn stroke_thickness(&self) -> u32 {
        self.stroke_thickness
    }

    /// Returns the factor between view size and physical size.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `true` if single-node rows span the full width.
    pub fn stretch_single_node_rows(&self) -> bool {
        self.stretch_single_node_rows
    }

    /// Sets the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Sets the placeholder fill.
    pub fn with_placeholder_fill(mut self, color: impl Into<String>) -> Self {
        self.placeholder_fill = color.into();
        self
    }

    /// Sets the stroke color.
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Enables or disables stretching of single-node rows.
    pub fn with_stretch_single_node_rows(mut self, stretch: bool) -> Self {
        self.stretch_single_node_rows = stretch;
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "lightgray".to_string(),
            placeholder_fill: "lightgray".to_string(),
            stroke_color: "black".to_string(),
            rect_width: 36,
            rect_height: 10,
            font_size: 4,
            stroke_thickness: 1,
            scale: 3,
            stretch_single_node_rows: false,
        }
    }
}
