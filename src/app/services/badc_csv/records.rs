//! Data row assembly against the column header
//!
//! Records are built by positional pairing: header cell *i* names row cell
//! *i*. Pairing stops at the shorter of the two sequences, so a short row
//! yields a record with missing keys and a long row drops its extra cells.
//! Length mismatches are deliberate lenient behavior, not errors.

use csv::StringRecord;

use crate::app::models::DataRecord;

/// Zip data rows against the header into one [`DataRecord`] per row
pub fn assemble_records(header: &StringRecord, rows: &[StringRecord]) -> Vec<DataRecord> {
    rows.iter()
        .map(|row| {
            header
                .iter()
                .zip(row.iter())
                .map(|(name, cell)| (name.to_string(), cell.to_string()))
                .collect()
        })
        .collect()
}
