//! Preamble row assembly into a label-keyed metadata map
//!
//! Each preamble row carries a label, a reference (`G` or a field name) and
//! one or more values. Rows with fewer than three cells carry no complete
//! entry and are skipped without error.

use csv::StringRecord;
use tracing::debug;

use crate::app::models::{MetadataEntry, MetadataMap};
use crate::constants::MIN_METADATA_CELLS;

/// Assemble metadata-candidate rows into a [`MetadataMap`]
///
/// Label, reference and every value cell are trimmed independently. Repeated
/// labels accumulate entries in row order; the map preserves that order per
/// label.
pub fn assemble_metadata(rows: &[StringRecord]) -> MetadataMap {
    let mut map = MetadataMap::new();
    let mut skipped = 0usize;

    for row in rows {
        if row.len() < MIN_METADATA_CELLS {
            skipped += 1;
            continue;
        }

        let label = row.get(0).map(str::trim).unwrap_or_default();
        let reference = row.get(1).map(str::trim).unwrap_or_default();
        let values: Vec<String> = row.iter().skip(2).map(|v| v.trim().to_string()).collect();

        map.push(label, MetadataEntry::new(reference, values));
    }

    if skipped > 0 {
        debug!("Skipped {} preamble rows with fewer than 3 cells", skipped);
    }

    map
}
