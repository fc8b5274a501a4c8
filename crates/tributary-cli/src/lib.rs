//! CLI logic for the Tributary report tool.
//!
//! This module contains the core CLI logic: it loads the dataset and any
//! literal diagrams, builds the report's charts, and writes the rendered
//! document.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::fs;

use log::{debug, info};

use tributary::{ReportBuilder, TributaryError};

/// Run the Tributary CLI application
///
/// This function processes the dataset through the Tributary pipeline
/// and writes the resulting report to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TributaryError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset or literal parsing errors
/// - Chart building errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), TributaryError> {
    info!(
        dataset_path = args.dataset,
        output_path = args.output;
        "Processing dataset"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.dataset)?;

    let builder = ReportBuilder::new(app_config);
    let dataset = builder.load_dataset(&source)?;
    let mut charts = builder.build_charts(&dataset)?;

    for path in &args.literals {
        debug!(path; "Loading literal diagram");
        let source = fs::read_to_string(path)?;
        let literal = builder.load_literal(&source)?;
        let chart = builder.literal_chart(literal, charts.len() + 1)?;
        charts.push(chart);
    }

    let output = match args.format {
        Format::Html => builder.render_html(&charts)?,
        Format::Json => builder.render_json(&charts)?,
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output, charts = charts.len(); "Report exported successfully");

    Ok(())
}
