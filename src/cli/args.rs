//! Command-line argument definitions for the MIDAS Open parser
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the MIDAS Open BADC-CSV parser
///
/// Parses a BADC-CSV file from the MIDAS Open dataset, extracts its MIDAS
/// metadata and reports the result together with the parsed data records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "midas-open-parser",
    version,
    about = "Parse a MIDAS Open BADC-CSV file and report its metadata and records",
    long_about = "Parses a BADC-CSV file from the UK Met Office MIDAS Open dataset: the \
                  metadata preamble is interpreted through the MIDAS label vocabulary into \
                  global and per-field metadata, and the data section is read into records. \
                  Files containing metadata labels outside the MIDAS vocabulary are rejected \
                  with a non-zero exit code."
)]
pub struct Args {
    /// Path to the BADC-CSV file to parse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the report
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Tracing filter directive implied by the verbosity flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
