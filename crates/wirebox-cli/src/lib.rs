//! CLI logic for the Wirebox diagram tool.
//!
//! This module contains the core CLI logic for the Wirebox diagram tool.

pub mod dump;
pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Emit};

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use wirebox::{DiagramBuilder, WireboxError, config::AppConfig};

use error_adapter::{render_report, warnings_to_reportables};

/// Run the Wirebox CLI application
///
/// This function processes the input file through the Wirebox pipeline.
/// With [`Emit::Svg`] the rendered SVG is written to the output file; the
/// other modes print a text dump to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WireboxError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), WireboxError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        emit:? = args.emit;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.strict {
        app_config = AppConfig::new(
            app_config.parser().clone().with_strict(true),
            app_config.style().clone(),
        );
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source)?;

    for reportable in warnings_to_reportables(diagram.warnings(), &source) {
        warn!("{}", render_report(&reportable));
    }
    if diagram.is_truncated() {
        warn!(termination:? = diagram.termination(); "Input ended inside an open block");
    }

    match args.emit {
        Emit::Svg => {
            let grid = builder.project(&diagram);
            let svg = builder.render_svg(&grid)?;
            fs::write(&args.output, svg)?;
            info!(output_file = args.output; "SVG exported successfully");
        }
        Emit::Tree => {
            io::stdout().write_all(dump::format_tree(diagram.root()).as_bytes())?;
        }
        Emit::Grid => {
            let grid = builder.project(&diagram);
            io::stdout().write_all(dump::format_grid(&grid).as_bytes())?;
        }
    }

    Ok(())
}
