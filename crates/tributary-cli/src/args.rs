//! Command-line argument definitions for the Tributary CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! extra literal charts, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Standalone HTML page drawing the charts with d3-sankey
    #[default]
    Html,
    /// JSON array of chart descriptions
    Json,
}

/// Command-line arguments for the Tributary report tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the cost dataset (JSON with a `student-costs` array)
    #[arg(help = "Path to the dataset file")]
    pub dataset: String,

    /// Path to the output file
    #[arg(short, long, default_value = "sankey.html")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Literal diagram files (JSON) appended after the built-in charts
    #[arg(long = "literal", value_name = "PATH")]
    pub literals: Vec<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tributary", "data/jmu.json"]);

        assert_eq!(args.dataset, "data/jmu.json");
        assert_eq!(args.output, "sankey.html");
        assert_eq!(args.format, Format::Html);
        assert!(args.config.is_none());
        assert!(args.literals.is_empty());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_repeated_literals() {
        let args = Args::parse_from([
            "tributary",
            "data/jmu.json",
            "--literal",
            "a.json",
            "--literal",
            "b.json",
            "-f",
            "json",
        ]);

        assert_eq!(args.literals, ["a.json", "b.json"]);
        assert_eq!(args.format, Format::Json);
    }
}
