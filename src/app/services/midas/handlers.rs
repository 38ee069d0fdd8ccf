//! Label handler capability and per-label implementations
//!
//! Every MIDAS label is interpreted by a [`LabelHandler`]. The trait defaults
//! encode the base behavior: global occurrences pass their values through
//! unchanged, and field-level occurrences fail because most labels have no
//! field-level meaning. Handlers are stateless, so a registry of them can be
//! shared by reference across parallel extractions.

use crate::app::models::MetadataValue;
use crate::{Error, Result};

/// Interpretation capability for one metadata label
pub trait LabelHandler: std::fmt::Debug + Send + Sync {
    /// Interpret a global-scope occurrence of the label
    ///
    /// The default passes the value list through unchanged.
    fn handle_global(&self, _label: &str, values: &[String]) -> Result<MetadataValue> {
        Ok(MetadataValue::List(values.to_vec()))
    }

    /// Interpret a field-scope occurrence of the label
    ///
    /// Returns the key and value to merge into the field's metadata bucket.
    /// The default fails: a label without an override has no field-level
    /// meaning.
    fn handle_field(
        &self,
        _field: &str,
        label: &str,
        _values: &[String],
    ) -> Result<(String, MetadataValue)> {
        Err(Error::unknown_labels([label]))
    }
}

/// Labels with no special handling: base behavior only
///
/// Used for `source`, `creator`, `activity`, `feature_type`,
/// `observation_station`, `collection_name`, `collection_version_number`,
/// `date_valid`, `history` and `last_revised_date`.
#[derive(Debug)]
pub struct Passthrough;

impl LabelHandler for Passthrough {}

/// `Conventions` - alternating key/value cells folded into a mapping
///
/// `["CF", "1.6", "BADC-CSV", "1"]` becomes `{CF: 1.6, BADC-CSV: 1}`. A
/// trailing unpaired cell is dropped.
#[derive(Debug)]
pub struct Conventions;

impl LabelHandler for Conventions {
    fn handle_global(&self, _label: &str, values: &[String]) -> Result<MetadataValue> {
        let map = values
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), MetadataValue::Text(pair[1].clone())))
            .collect();
        Ok(MetadataValue::Map(map))
    }
}

/// `title` - reduced to the first value, empty text when there are none
#[derive(Debug)]
pub struct Title;

impl LabelHandler for Title {
    fn handle_global(&self, _label: &str, values: &[String]) -> Result<MetadataValue> {
        Ok(MetadataValue::Text(values.first().cloned().unwrap_or_default()))
    }
}

/// Labels whose only meaningful value is the first cell
///
/// Used for `src_id`, `historic_county_name`, `midas_qc_version_number`,
/// `midas_station_id` and `missing_value`. Unlike `title`, an empty value
/// list is a precondition failure.
#[derive(Debug)]
pub struct FirstValue;

impl LabelHandler for FirstValue {
    fn handle_global(&self, label: &str, values: &[String]) -> Result<MetadataValue> {
        let first = values
            .first()
            .ok_or_else(|| Error::invalid_value(label, "expected at least one value"))?;
        Ok(MetadataValue::Text(first.clone()))
    }
}

/// `location` - shape depends on the value count
///
/// One value is a place name, two are latitude/longitude, four are a
/// north/west/south/east bounding box. Any other count is rejected.
#[derive(Debug)]
pub struct Location;

impl LabelHandler for Location {
    fn handle_global(&self, label: &str, values: &[String]) -> Result<MetadataValue> {
        match values {
            [name] => Ok(MetadataValue::map([(
                "name",
                MetadataValue::text(name.clone()),
            )])),
            [lat, lon] => Ok(MetadataValue::map([
                ("latitude", parse_coordinate(label, "latitude", lat)?),
                ("longitude", parse_coordinate(label, "longitude", lon)?),
            ])),
            [north, west, south, east] => Ok(MetadataValue::map([(
                "bounding_box",
                MetadataValue::map([
                    ("north", parse_coordinate(label, "north", north)?),
                    ("west", parse_coordinate(label, "west", west)?),
                    ("south", parse_coordinate(label, "south", south)?),
                    ("east", parse_coordinate(label, "east", east)?),
                ]),
            )])),
            _ => Err(Error::invalid_value(
                label,
                format!("expected 1, 2 or 4 values, got {}", values.len()),
            )),
        }
    }
}

fn parse_coordinate(label: &str, part: &str, raw: &str) -> Result<MetadataValue> {
    raw.trim()
        .parse::<f64>()
        .map(MetadataValue::Number)
        .map_err(|_| Error::invalid_value(label, format!("invalid {part} coordinate: '{raw}'")))
}

/// `height` - the first two values are the measurement and its unit
///
/// Fewer than two values is a precondition failure; extra values are
/// ignored.
#[derive(Debug)]
pub struct Height;

impl LabelHandler for Height {
    fn handle_global(&self, label: &str, values: &[String]) -> Result<MetadataValue> {
        match values {
            [value, unit, ..] => Ok(MetadataValue::map([
                ("value", MetadataValue::text(value.clone())),
                ("unit", MetadataValue::text(unit.clone())),
            ])),
            _ => Err(Error::invalid_value(
                label,
                format!("expected value and unit, got {} values", values.len()),
            )),
        }
    }
}

/// Field-level labels that wrap their full value list under a fixed key
///
/// Used for `long_name`, `comments` and `coordinate_variable`.
#[derive(Debug)]
pub struct FieldValues {
    key: &'static str,
}

impl FieldValues {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl LabelHandler for FieldValues {
    fn handle_field(
        &self,
        _field: &str,
        _label: &str,
        values: &[String],
    ) -> Result<(String, MetadataValue)> {
        Ok((self.key.to_string(), MetadataValue::List(values.to_vec())))
    }
}

/// Field-level labels that keep only their first value (`type`)
#[derive(Debug)]
pub struct FieldFirstValue {
    key: &'static str,
}

impl FieldFirstValue {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl LabelHandler for FieldFirstValue {
    fn handle_field(
        &self,
        field: &str,
        label: &str,
        values: &[String],
    ) -> Result<(String, MetadataValue)> {
        let first = values.first().ok_or_else(|| {
            Error::invalid_field_value(label, field, "expected at least one value")
        })?;
        Ok((self.key.to_string(), MetadataValue::Text(first.clone())))
    }
}
