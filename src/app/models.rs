//! Data models for BADC-CSV parsing and MIDAS metadata extraction
//!
//! This module contains the core data structures for representing the parsed
//! metadata preamble, the tabular data section, and the structured metadata
//! produced by the MIDAS label handlers.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Parsed Metadata Preamble
// =============================================================================

/// A single metadata preamble entry: the reference cell and the value cells
/// that follow it
///
/// The reference is either the literal global marker `"G"` or the name of a
/// data column the entry applies to. All cells are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    /// `"G"` for global entries, otherwise a field (column) name
    pub reference: String,

    /// The trimmed value cells following the reference cell, in row order
    pub values: Vec<String>,
}

impl MetadataEntry {
    pub fn new(reference: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            reference: reference.into(),
            values,
        }
    }

    /// Whether this entry applies to the whole dataset rather than one field
    pub fn is_global(&self) -> bool {
        self.reference == crate::constants::GLOBAL_REFERENCE
    }
}

/// Mapping from metadata label to its entries, insertion-ordered
///
/// A label may occur on several preamble rows (e.g. one `long_name` row per
/// data column); each occurrence appends an entry under that label. Labels
/// iterate in first-occurrence document order and entries per label in row
/// order. The map is built once per file and read-only afterwards; at the
/// few dozen labels a preamble carries, linear label lookup is fine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataMap {
    entries: Vec<(String, Vec<MetadataEntry>)>,
}

impl MetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under a label, preserving document order
    pub fn push(&mut self, label: impl Into<String>, entry: MetadataEntry) {
        let label = label.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing == &label)
        {
            Some((_, entries)) => entries.push(entry),
            None => self.entries.push((label, vec![entry])),
        }
    }

    /// All entries recorded for a label, in document order
    pub fn get(&self, label: &str) -> Option<&[MetadataEntry]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, entries)| entries.as_slice())
    }

    /// The labels present in the preamble, in first-occurrence order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Iterate over (label, entries) pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MetadataEntry])> {
        self.entries
            .iter()
            .map(|(label, entries)| (label.as_str(), entries.as_slice()))
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetadataMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, entries) in &self.entries {
            map.serialize_entry(label, entries)?;
        }
        map.end()
    }
}

// =============================================================================
// Data Section Records
// =============================================================================

/// One data-section row, keyed by the column-header cells
///
/// Built by positionally pairing header cell *i* with row cell *i*; pairing
/// stops at the shorter of the two, so short rows produce records with
/// missing keys and long rows drop their trailing cells.
pub type DataRecord = HashMap<String, String>;

// =============================================================================
// Structured MIDAS Metadata
// =============================================================================

/// A handler-produced metadata value
///
/// Label handlers are heterogeneous: `title` yields a single string,
/// `location` a nested mapping with numeric coordinates, `long_name` the raw
/// value list. This enum covers all handler result shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
    Map(HashMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Build a map value from key/value pairs
    pub fn map(pairs: impl IntoIterator<Item = (&'static str, MetadataValue)>) -> Self {
        Self::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Build a text value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::List(values) => write!(f, "[{}]", values.join(", ")),
            Self::Map(map) => {
                // Sort keys so rendered output is deterministic
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", map[*key])?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Extracted MIDAS metadata, split into a global bucket and per-field buckets
///
/// Produced by [`crate::extract`]; owned solely by the caller afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredMetadata {
    /// Dataset-wide metadata, one result per label (last occurrence wins)
    pub global: HashMap<String, MetadataValue>,

    /// Field-level metadata, merged by key per field
    pub fields: HashMap<String, HashMap<String, MetadataValue>>,
}

impl StructuredMetadata {
    pub fn new() -> Self {
        Self::default()
    }
}
