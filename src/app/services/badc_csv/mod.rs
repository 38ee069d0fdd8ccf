//! BADC-CSV parser for MIDAS Open files
//!
//! This module parses the BADC-CSV format: a labelled metadata preamble,
//! a sentinel row whose first cell is `data`, a column-header row, the data
//! rows, and a terminating `end data` sentinel.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`sections`] - Row classification and section-boundary detection
//! - [`metadata`] - Preamble rows to label-keyed metadata map
//! - [`records`] - Header/data rows to record mappings
//! - [`parser`] - File-level entry points and error context
//!
//! ## Usage
//!
//! ```rust,no_run
//! use midas_open_parser::app::services::badc_csv;
//!
//! # fn example() -> midas_open_parser::Result<()> {
//! let metadata = badc_csv::parse_metadata(std::path::Path::new("station.csv"))?;
//! let records = badc_csv::parse_records(std::path::Path::new("station.csv"))?;
//!
//! println!("{} labels, {} records", metadata.len(), records.len());
//! # Ok(())
//! # }
//! ```

pub mod metadata;
pub mod parser;
pub mod records;
pub mod sections;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use metadata::assemble_metadata;
pub use parser::{parse_metadata, parse_records};
pub use records::assemble_records;
pub use sections::{split_rows, Sections};
