//! Row classification and section-boundary detection
//!
//! A BADC-CSV file is split on two sentinel rows: one whose first cell is
//! `data` (the row after it is the column header) and one whose first cell is
//! `end data` (everything after it is ignored). Sentinel comparison trims the
//! cell and ignores ASCII case.
//!
//! The underlying CSV reader skips blank lines, but a blank line is still a
//! row of the file: it is recovered as a zero-cell row, which is never a
//! boundary and, inside the data section, is kept as a data row.

use csv::{Position, StringRecord};
use std::io::Read;

use crate::constants::{DATA_MARKER, END_DATA_MARKER};
use crate::Result;

/// The three row classes of a BADC-CSV file
///
/// `header` is `None` when the file has no `data` sentinel; callers that
/// require a data section treat that as "no records" rather than an error.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    /// Rows preceding the `data` sentinel, candidates for metadata assembly
    pub metadata_rows: Vec<StringRecord>,

    /// The column-header row captured immediately after the `data` sentinel
    pub header: Option<StringRecord>,

    /// Rows between the header and the `end data` sentinel (exclusive),
    /// including zero-cell rows recovered from blank lines
    pub data_rows: Vec<StringRecord>,
}

/// Check whether a row's first cell matches a section sentinel
///
/// A row with no cells is never a boundary.
pub fn is_section_marker(record: &StringRecord, marker: &str) -> bool {
    record
        .get(0)
        .map(|cell| cell.trim().eq_ignore_ascii_case(marker))
        .unwrap_or(false)
}

/// Split a raw row stream into preamble, header and data rows
///
/// Scans rows in order: before the `data` sentinel every row is a metadata
/// candidate; the row after the sentinel is the column header; subsequent
/// rows are data rows until an `end data` sentinel stops the scan. Rows
/// after the terminator are never read.
pub fn split_rows<R: Read>(reader: R) -> Result<Sections> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut splitter = Splitter::default();
    let mut next_line = 1u64;

    loop {
        let mut record = StringRecord::new();
        let more = csv_reader.read_record(&mut record)?;

        // The csv reader drops blank lines; a jump in line numbers between
        // consecutive records tells how many were dropped, and each one is
        // replayed as a zero-cell row.
        let record_line = if more {
            record.position().map_or(next_line, Position::line)
        } else {
            csv_reader.position().line()
        };
        for _ in next_line..record_line {
            // A zero-cell row is never a terminator
            splitter.push_row(StringRecord::new());
        }
        if !more {
            break;
        }

        if splitter.push_row(record) {
            break;
        }
        next_line = csv_reader.position().line();
    }

    Ok(splitter.sections)
}

/// Section scan state machine
#[derive(Debug, Default)]
struct Splitter {
    sections: Sections,
    awaiting_header: bool,
    in_data: bool,
}

impl Splitter {
    /// Classify one row; returns `true` once the terminator is reached
    fn push_row(&mut self, record: StringRecord) -> bool {
        if self.awaiting_header {
            self.sections.header = Some(record);
            self.awaiting_header = false;
            self.in_data = true;
            return false;
        }

        if !self.in_data {
            if is_section_marker(&record, DATA_MARKER) {
                self.awaiting_header = true;
            } else {
                self.sections.metadata_rows.push(record);
            }
            return false;
        }

        if is_section_marker(&record, END_DATA_MARKER) {
            return true;
        }
        self.sections.data_rows.push(record);
        false
    }
}
