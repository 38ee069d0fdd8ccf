//! Tests for the extraction driver

use super::metadata_map;
use crate::app::models::MetadataValue;
use crate::app::services::midas::extractor::extract;
use crate::app::services::midas::handlers::{Height, Title};
use crate::app::services::midas::registry::LabelRegistry;
use crate::Error;

#[test]
fn test_extracts_global_and_field_metadata() {
    let map = metadata_map(&[
        ("title", "G", &["Example Station"]),
        ("location", "G", &["51.5", "-0.1"]),
        ("long_name", "src1", &["Air Temperature"]),
    ]);

    let result = extract(&map, &LabelRegistry::midas()).unwrap();

    assert_eq!(
        result.global["title"],
        MetadataValue::text("Example Station")
    );
    assert_eq!(
        result.global["location"],
        MetadataValue::map([
            ("latitude", MetadataValue::Number(51.5)),
            ("longitude", MetadataValue::Number(-0.1)),
        ])
    );
    assert_eq!(
        result.fields["src1"]["long_name"],
        MetadataValue::List(vec!["Air Temperature".to_string()])
    );
}

#[test]
fn test_unknown_label_fails_listing_it() {
    let map = metadata_map(&[
        ("title", "G", &["Example Station"]),
        ("foobar", "G", &["anything"]),
    ]);

    let err = extract(&map, &LabelRegistry::midas()).unwrap_err();
    assert!(matches!(err, Error::UnknownLabels { labels } if labels == vec!["foobar"]));
}

#[test]
fn test_unknown_labels_are_batch_collected_and_sorted() {
    let map = metadata_map(&[
        ("zulu", "G", &["z"]),
        ("title", "G", &["Example Station"]),
        ("alpha", "G", &["a"]),
    ]);

    let err = extract(&map, &LabelRegistry::midas()).unwrap_err();
    assert!(matches!(err, Error::UnknownLabels { labels } if labels == vec!["alpha", "zulu"]));
}

#[test]
fn test_unknown_label_check_runs_before_any_handler() {
    // A height entry that would fail its handler precondition, against a
    // registry that does not know "height": the outcome must be the
    // unknown-label failure, proving no handler executed.
    let mut registry = LabelRegistry::empty();
    registry.register("title", Title);

    let map = metadata_map(&[("height", "G", &["25"])]);

    let err = extract(&map, &registry).unwrap_err();
    assert!(matches!(err, Error::UnknownLabels { labels } if labels == vec!["height"]));
}

#[test]
fn test_repeated_global_entries_last_writer_wins() {
    let map = metadata_map(&[
        ("title", "G", &["First Title"]),
        ("title", "G", &["Second Title"]),
    ]);

    let result = extract(&map, &LabelRegistry::midas()).unwrap();
    assert_eq!(result.global["title"], MetadataValue::text("Second Title"));
}

#[test]
fn test_field_entries_merge_by_key() {
    let map = metadata_map(&[
        ("long_name", "air_temperature", &["Air Temperature", "degC"]),
        ("type", "air_temperature", &["float"]),
        ("long_name", "rainfall", &["Rainfall", "mm"]),
    ]);

    let result = extract(&map, &LabelRegistry::midas()).unwrap();

    let temperature = &result.fields["air_temperature"];
    assert_eq!(temperature.len(), 2);
    assert_eq!(
        temperature["long_name"],
        MetadataValue::List(vec!["Air Temperature".to_string(), "degC".to_string()])
    );
    assert_eq!(temperature["type"], MetadataValue::text("float"));

    assert_eq!(result.fields["rainfall"].len(), 1);
}

#[test]
fn test_field_occurrence_of_global_only_label_fails() {
    let map = metadata_map(&[("source", "air_temperature", &["Met Office"])]);

    let err = extract(&map, &LabelRegistry::midas()).unwrap_err();
    assert!(matches!(err, Error::UnknownLabels { labels } if labels == vec!["source"]));
}

#[test]
fn test_handler_value_errors_propagate_distinctly() {
    let mut registry = LabelRegistry::empty();
    registry.register("height", Height);

    let map = metadata_map(&[("height", "G", &["25"])]);

    let err = extract(&map, &registry).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { label, .. } if label == "height"));
}

#[test]
fn test_extraction_is_idempotent() {
    let map = metadata_map(&[
        ("Conventions", "G", &["CF", "1.6", "BADC-CSV", "1"]),
        ("title", "G", &["Example Station"]),
        ("location", "G", &["60", "2", "50", "-6"]),
        ("long_name", "src1", &["Air Temperature"]),
        ("type", "src1", &["float"]),
    ]);
    let registry = LabelRegistry::midas();

    let first = extract(&map, &registry).unwrap();
    let second = extract(&map, &registry).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_metadata_yields_empty_structure() {
    let map = metadata_map(&[]);
    let result = extract(&map, &LabelRegistry::midas()).unwrap();

    assert!(result.global.is_empty());
    assert!(result.fields.is_empty());
}
