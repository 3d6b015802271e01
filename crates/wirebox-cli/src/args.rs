//! Command-line argument definitions for the Wirebox CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the kind of output and logging verbosity.

use clap::{Parser, ValueEnum};

/// What the CLI produces from the input document.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emit {
    /// Render an SVG file.
    #[default]
    Svg,
    /// Print the parsed block tree.
    Tree,
    /// Print the projected grid.
    Grid,
}

/// Command-line arguments for the Wirebox diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input .blk file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output to produce
    #[arg(long, value_enum, default_value_t = Emit::Svg)]
    pub emit: Emit,

    /// Reject truncated and empty documents
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
