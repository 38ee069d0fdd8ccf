//! Closed label-to-handler lookup
//!
//! The registry is constructed once, passed by reference into extraction and
//! never mutated afterwards. A lookup miss is the caller's signal to fail
//! with an unknown-label error; the registry itself never fails.

use std::collections::HashMap;

use super::handlers::{
    Conventions, FieldFirstValue, FieldValues, FirstValue, Height, LabelHandler, Location,
    Passthrough, Title,
};

/// Read-only mapping from metadata label to its handler
#[derive(Debug)]
pub struct LabelRegistry {
    handlers: HashMap<&'static str, Box<dyn LabelHandler>>,
}

impl Default for LabelRegistry {
    fn default() -> Self {
        Self::midas()
    }
}

impl LabelRegistry {
    /// Create an empty registry
    ///
    /// Useful for tests and for callers building a restricted vocabulary.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create the standard MIDAS label registry
    pub fn midas() -> Self {
        let mut registry = Self::empty();

        registry.register("Conventions", Conventions);
        registry.register("title", Title);
        registry.register("source", Passthrough);
        registry.register("creator", Passthrough);
        registry.register("activity", Passthrough);
        registry.register("feature_type", Passthrough);
        registry.register("observation_station", Passthrough);
        registry.register("location", Location);
        registry.register("collection_name", Passthrough);
        registry.register("collection_version_number", Passthrough);
        registry.register("date_valid", Passthrough);
        registry.register("history", Passthrough);
        registry.register("last_revised_date", Passthrough);
        registry.register("comments", FieldValues::new("comments"));
        registry.register("coordinate_variable", FieldValues::new("coordinate_variable"));
        registry.register("long_name", FieldValues::new("long_name"));
        registry.register("type", FieldFirstValue::new("type"));
        registry.register("src_id", FirstValue);
        registry.register("historic_county_name", FirstValue);
        registry.register("height", Height);
        registry.register("midas_qc_version_number", FirstValue);
        registry.register("midas_station_id", FirstValue);
        registry.register("missing_value", FirstValue);

        registry
    }

    /// Register a handler for a label (construction time only)
    pub fn register(&mut self, label: &'static str, handler: impl LabelHandler + 'static) {
        self.handlers.insert(label, Box::new(handler));
    }

    /// Look up the handler for a label
    pub fn get(&self, label: &str) -> Option<&dyn LabelHandler> {
        self.handlers.get(label).map(|handler| handler.as_ref())
    }

    /// Whether a label is part of the vocabulary
    pub fn contains(&self, label: &str) -> bool {
        self.handlers.contains_key(label)
    }

    /// The labels this registry understands
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Number of registered labels
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
