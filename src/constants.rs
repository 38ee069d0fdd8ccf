//! Application constants for the MIDAS Open parser
//!
//! This module contains the BADC-CSV format sentinels and the MIDAS
//! vocabulary constants used throughout the parser.

// =============================================================================
// BADC-CSV Section Sentinels
// =============================================================================

/// First-cell sentinel that opens the data section (compared case-insensitively
/// after trimming; the row that follows it is the column header)
pub const DATA_MARKER: &str = "data";

/// First-cell sentinel that terminates the data section
pub const END_DATA_MARKER: &str = "end data";

// =============================================================================
// Metadata Row Layout
// =============================================================================

/// Reference cell value marking a metadata row as global (dataset-wide)
/// rather than field-level
pub const GLOBAL_REFERENCE: &str = "G";

/// Minimum number of raw cells for a preamble row to yield a metadata entry
/// (label, reference, and at least one value)
pub const MIN_METADATA_CELLS: usize = 3;
