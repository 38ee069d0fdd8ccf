//! File-level parse entry points
//!
//! These functions own the file handle for the duration of one pass and map
//! I/O and CSV failures into crate errors carrying the file path. All other
//! work is delegated to the section splitter and the assemblers.

use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

use super::metadata::assemble_metadata;
use super::records::assemble_records;
use super::sections::{is_section_marker, split_rows};
use crate::app::models::{DataRecord, MetadataMap};
use crate::constants::DATA_MARKER;
use crate::{Error, Result};

/// Parse the metadata preamble of a BADC-CSV file
///
/// Reads rows only up to the `data` sentinel; the data section is never
/// touched. Returns an empty map for a file with no preamble rows.
pub fn parse_metadata(path: &Path) -> Result<MetadataMap> {
    info!("Parsing BADC-CSV metadata preamble: {}", path.display());

    let file = open(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut preamble = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| file_context(e, path))?;
        if is_section_marker(&record, DATA_MARKER) {
            break;
        }
        preamble.push(record);
    }

    let map = assemble_metadata(&preamble);
    debug!(
        "Assembled {} metadata labels from {} preamble rows",
        map.len(),
        preamble.len()
    );
    Ok(map)
}

/// Parse the data section of a BADC-CSV file into records
///
/// Locates the column header after the `data` sentinel and zips each data
/// row against it. A file without a `data` sentinel yields no records.
pub fn parse_records(path: &Path) -> Result<Vec<DataRecord>> {
    info!("Parsing BADC-CSV data section: {}", path.display());

    let file = open(path)?;
    let sections = split_rows(file).map_err(|e| match e {
        Error::CsvParsing {
            message, source, ..
        } => Error::csv_parsing(path.display().to_string(), message, source),
        other => other,
    })?;

    let records = match &sections.header {
        Some(header) => assemble_records(header, &sections.data_rows),
        None => {
            warn!("No 'data' section marker in {}", path.display());
            Vec::new()
        }
    };

    debug!("Assembled {} data records", records.len());
    Ok(records)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))
}

fn file_context(error: csv::Error, path: &Path) -> Error {
    Error::csv_parsing(
        path.display().to_string(),
        "failed to read row",
        Some(error),
    )
}
