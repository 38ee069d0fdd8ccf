//! Test utilities and fixtures for BADC-CSV parser testing
//!
//! This module provides shared fixture content and helper functions used
//! across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;

/// Helper to create a complete test BADC-CSV content
pub fn create_test_badc_csv() -> String {
    r#"Conventions,G,BADC-CSV,1
title,G,Example Station Data
source,G,MIDAS Open
location,G,51.5,-0.1
height,G,25,m
long_name,air_temperature,Air Temperature,degC
type,air_temperature,float
data
ob_end_time,air_temperature,air_temperature_q
2020-01-01 09:00:00,5.2,0
2020-01-02 09:00:00,6.1,0
end data"#
        .to_string()
}

/// Helper to create BADC-CSV content without a data section
pub fn create_metadata_only_badc_csv() -> String {
    r#"Conventions,G,BADC-CSV,1
title,G,Example Station Data
missing_value,G,NA"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
