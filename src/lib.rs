//! MIDAS Open Parser Library
//!
//! A Rust library for parsing BADC-CSV files from the UK Met Office MIDAS
//! Open dataset and extracting their metadata into a structured form.
//!
//! This library provides tools for:
//! - Splitting BADC-CSV files into metadata preamble and data sections
//! - Assembling the metadata preamble into a label-keyed metadata map
//! - Zipping data rows against the column header into record mappings
//! - Interpreting MIDAS metadata labels through a closed handler registry
//! - Producing a two-level (global / per-field) structured metadata result

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod badc_csv;
        pub mod midas;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DataRecord, MetadataEntry, MetadataMap, MetadataValue, StructuredMetadata};
pub use app::services::badc_csv::{parse_metadata, parse_records};
pub use app::services::midas::{extract, LabelHandler, LabelRegistry};

/// Result type alias for MIDAS parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for BADC-CSV parsing and MIDAS metadata extraction
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Metadata labels with no registered handler
    #[error("Unknown metadata labels: {}", labels.join(", "))]
    UnknownLabels { labels: Vec<String> },

    /// A label handler rejected the values supplied for its label
    #[error("Invalid value for label '{label}'{}: {message}", field.as_ref().map(|f| format!(" (field '{f}')")).unwrap_or_default())]
    InvalidValue {
        label: String,
        field: Option<String>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unknown-labels error from any collection of labels
    pub fn unknown_labels(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::UnknownLabels {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an invalid-value error for a global-scope label
    pub fn invalid_value(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            label: label.into(),
            field: None,
            message: message.into(),
        }
    }

    /// Create an invalid-value error carrying field context
    pub fn invalid_field_value(
        label: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            label: label.into(),
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
