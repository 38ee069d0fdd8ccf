//! Command implementation for the MIDAS Open parser CLI
//!
//! Drives the parse-extract pipeline over one file and renders the result in
//! the requested output format. All failures propagate to `main`, which maps
//! them to a non-zero exit code.

use colored::Colorize;
use tracing::info;

use crate::app::models::{DataRecord, StructuredMetadata};
use crate::app::services::{badc_csv, midas};
use crate::cli::args::{Args, OutputFormat};
use crate::Result;

/// Run the parser over the file named in the arguments
pub fn run(args: Args) -> Result<()> {
    info!("Processing {}", args.file.display());

    let metadata = badc_csv::parse_metadata(&args.file)?;
    let registry = midas::LabelRegistry::midas();
    let structured = midas::extract(&metadata, &registry)?;
    let records = badc_csv::parse_records(&args.file)?;

    match args.format {
        OutputFormat::Human => print_human(&structured, &records),
        OutputFormat::Json => print_json(&structured, &records),
    }

    Ok(())
}

/// Render the human-readable report
fn print_human(structured: &StructuredMetadata, records: &[DataRecord]) {
    println!("{}", "Global Metadata".bold());
    for label in sorted_keys(structured.global.keys()) {
        println!("  {}: {}", label.cyan(), structured.global[label]);
    }

    println!();
    println!("{}", "Field Metadata".bold());
    for field in sorted_keys(structured.fields.keys()) {
        println!("  {}", field.yellow());
        let bucket = &structured.fields[field];
        for label in sorted_keys(bucket.keys()) {
            println!("    {}: {}", label.cyan(), bucket[label]);
        }
    }

    println!();
    println!(
        "{} {} data record{}",
        "Parsed".green().bold(),
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );
}

/// Render the full result as pretty-printed JSON
fn print_json(structured: &StructuredMetadata, records: &[DataRecord]) {
    let report = serde_json::json!({
        "metadata": structured,
        "records": records,
    });
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}

fn sorted_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<&'a String> {
    let mut keys: Vec<&String> = keys.collect();
    keys.sort();
    keys
}
