//! Test utilities for MIDAS metadata extraction testing

use crate::app::models::{MetadataEntry, MetadataMap};

// Test modules
mod extractor_tests;

/// Helper to build an owned value list from string literals
pub fn values(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

/// Helper to build a metadata map from (label, reference, values) rows
pub fn metadata_map(rows: &[(&str, &str, &[&str])]) -> MetadataMap {
    let mut map = MetadataMap::new();
    for (label, reference, cells) in rows {
        map.push(*label, MetadataEntry::new(*reference, values(cells)));
    }
    map
}
