//! Tests for the file-level parse entry points

use super::{create_metadata_only_badc_csv, create_temp_file, create_test_badc_csv};
use crate::app::services::badc_csv::parser::{parse_metadata, parse_records};
use crate::Error;
use std::path::Path;

#[test]
fn test_parse_metadata_from_file() {
    let temp_file = create_temp_file(&create_test_badc_csv());
    let map = parse_metadata(temp_file.path()).unwrap();

    assert_eq!(map.len(), 7);
    assert_eq!(map.get("title").unwrap()[0].values, vec!["Example Station Data"]);
    assert_eq!(map.get("long_name").unwrap()[0].reference, "air_temperature");
}

#[test]
fn test_parse_metadata_stops_at_data_marker() {
    let temp_file = create_temp_file(&create_test_badc_csv());
    let map = parse_metadata(temp_file.path()).unwrap();

    // Column header and data rows must not leak into the metadata map
    assert!(map.get("ob_end_time").is_none());
    assert!(map.get("2020-01-01 09:00:00").is_none());
}

#[test]
fn test_parse_metadata_without_data_section() {
    let temp_file = create_temp_file(&create_metadata_only_badc_csv());
    let map = parse_metadata(temp_file.path()).unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("missing_value").unwrap()[0].values, vec!["NA"]);
}

#[test]
fn test_parse_records_from_file() {
    let temp_file = create_temp_file(&create_test_badc_csv());
    let records = parse_records(temp_file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["ob_end_time"], "2020-01-01 09:00:00");
    assert_eq!(records[0]["air_temperature"], "5.2");
    assert_eq!(records[1]["air_temperature_q"], "0");
}

#[test]
fn test_parse_records_without_data_section() {
    let temp_file = create_temp_file(&create_metadata_only_badc_csv());
    let records = parse_records(temp_file.path()).unwrap();

    assert!(records.is_empty());
}

#[test]
fn test_blank_data_line_produces_an_empty_record() {
    let temp_file = create_temp_file(
        "title,G,Example\ndata\ntime,value\n2020-01-01,5.2\n\n2020-01-02,6.1\nend data",
    );
    let records = parse_records(temp_file.path()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["value"], "5.2");
    assert!(records[1].is_empty());
    assert_eq!(records[2]["value"], "6.1");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = Path::new("/nonexistent/station.csv");

    let metadata_err = parse_metadata(path).unwrap_err();
    assert!(matches!(metadata_err, Error::Io { .. }));

    let records_err = parse_records(path).unwrap_err();
    assert!(matches!(records_err, Error::Io { .. }));
}
