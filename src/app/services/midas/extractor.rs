//! Extraction driver over the assembled metadata
//!
//! Validates the whole document against the registry vocabulary first, then
//! dispatches every entry to its handler. Global results replace earlier
//! ones for the same label; field results merge by key into the field's
//! bucket. The asymmetry matches the MIDAS convention and is deliberate.

use tracing::debug;

use super::registry::LabelRegistry;
use crate::app::models::{MetadataMap, StructuredMetadata};
use crate::{Error, Result};

/// Extract structured MIDAS metadata from an assembled metadata map
///
/// Pure over its inputs: no I/O, no shared state, and re-running it on the
/// same inputs yields a structurally equal result.
///
/// # Errors
///
/// [`Error::UnknownLabels`] if any label in the map has no registered
/// handler (all offending labels are collected before any handler runs), or
/// [`Error::InvalidValue`] when a handler rejects its values.
pub fn extract(metadata: &MetadataMap, registry: &LabelRegistry) -> Result<StructuredMetadata> {
    // Whole-document precondition: reject every unknown label up front
    let mut unknown: Vec<String> = metadata
        .labels()
        .filter(|label| !registry.contains(label))
        .map(str::to_string)
        .collect();
    if !unknown.is_empty() {
        unknown.sort();
        return Err(Error::unknown_labels(unknown));
    }

    let mut structured = StructuredMetadata::new();

    for (label, entries) in metadata.iter() {
        // Consistency safeguard; unreachable after the batch check above
        let handler = registry
            .get(label)
            .ok_or_else(|| Error::unknown_labels([label]))?;

        for entry in entries {
            if entry.is_global() {
                let value = handler.handle_global(label, &entry.values)?;
                // Repeated global entries: the last one in document order wins
                structured.global.insert(label.to_string(), value);
            } else {
                let (key, value) = handler.handle_field(&entry.reference, label, &entry.values)?;
                structured
                    .fields
                    .entry(entry.reference.clone())
                    .or_default()
                    .insert(key, value);
            }
        }
    }

    debug!(
        "Extracted {} global labels and {} fields",
        structured.global.len(),
        structured.fields.len()
    );
    Ok(structured)
}
