//! Integration tests for export ingestion through the public API
//!
//! These tests write export files to disk and exercise the full path from
//! file open through column mapping, record decoding, identity derivation,
//! and timestamp resolution.

use std::io::Write;

use birdfetch::app::services::ebird_export::read_records;
use birdfetch::Error;
use chrono::{NaiveDate, Timelike};
use tempfile::NamedTempFile;

fn write_export(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// An export in the current full layout, mixed date formats across rows
const MIXED_FORMAT_EXPORT: &str = "\
Submission ID,Common Name,Scientific Name,Taxonomic Order,Count,State/Province,County,Location ID,Location,Latitude,Longitude,Date,Time,Protocol,Duration (Min),All Obs Reported,Distance Traveled (km),Area Covered (ha),Number of Observers,Breeding Code,Observation Details,Checklist Comments,ML Catalog Numbers
S193523301,Ostrich,Struthio camelus,1,2,ER,Anseba,L1000,Keren,15.78,38.45,2024-05-01,07:00 AM,Traveling,60,1,1.2,,2,,seen well,,123456
S193523302,Mallard,Anas platyrhynchos,490,X,NY,Kings,L2000,Prospect Park,40.66,-73.97,5/1/2024,3:04 PM,Stationary,30,1,,,1,,,,
S193523303,scoter sp.,Melanitta sp.,600,1,MA,Essex,L3000,Halibut Point,42.69,-70.63,2024-05-02,,Incidental,,0,,,1,,,,
";

/// An older export: fewer columns, different order, short rows
const LEGACY_EXPORT: &str = "\
Scientific Name,Submission ID,Date,Count,Location
Struthio camelus,S100,2023-11-12,4,Keren
Anas platyrhynchos x rubripes,S101,11/12/2023
";

#[test]
fn test_full_export_end_to_end() {
    let file = write_export(MIXED_FORMAT_EXPORT);
    let records: Vec<_> = read_records(file.path()).unwrap().collect();

    assert_eq!(records.len(), 3);

    // Line numbers are file positions, header offset included
    assert_eq!(records[0].line, 2);
    assert_eq!(records[2].line, 4);

    // Identity and checklist URL
    let id = records[0].observation_id();
    assert!(id.is_valid());
    assert_eq!(id.to_string(), "S193523301[Struthio camelus]");
    assert_eq!(
        records[0].url(),
        "https://ebird.org/checklist/S193523301"
    );

    // ISO date with time
    let observed = records[0].observed().unwrap();
    assert_eq!(
        observed.date(),
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    );
    assert_eq!(observed.hour(), 7);

    // Slash date with unpadded afternoon time
    let observed = records[1].observed().unwrap();
    assert_eq!(
        observed.date(),
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    );
    assert_eq!((observed.hour(), observed.minute()), (15, 4));

    // Date-only rows resolve to midnight
    let observed = records[2].observed().unwrap();
    assert_eq!((observed.hour(), observed.minute()), (0, 0));

    // Count semantics and media references
    assert_eq!(records[0].count_value(), Some(2));
    assert_eq!(records[1].count_value(), None);
    assert_eq!(records[0].ml_asset_ids(), vec!["123456"]);
    assert!(records[1].ml_asset_ids().is_empty());
}

#[test]
fn test_legacy_export_layout() {
    let file = write_export(LEGACY_EXPORT);
    let records: Vec<_> = read_records(file.path()).unwrap().collect();

    assert_eq!(records.len(), 2);

    // Reordered columns decode by name
    assert_eq!(records[0].submission_id, "S100");
    assert_eq!(records[0].scientific_name, "Struthio camelus");
    assert_eq!(records[0].location, "Keren");

    // Columns absent from this export are empty, not errors
    assert_eq!(records[0].common_name, "");
    assert_eq!(records[0].time, "");

    // Short second row: trailing fields empty, record still valid
    assert_eq!(records[1].count, "");
    assert_eq!(records[1].location, "");
    assert!(records[1].observation_id().is_valid());
    let observed = records[1].observed().unwrap();
    assert_eq!(
        observed.date(),
        NaiveDate::from_ymd_opt(2023, 11, 12).unwrap()
    );
}

#[test]
fn test_unreadable_and_empty_exports_are_typed_errors() {
    let err = read_records(std::path::Path::new("/no/such/export.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));

    let file = write_export("");
    let err = read_records(file.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyExport { .. }));
}

#[test]
fn test_stream_is_single_pass_and_cooperative() {
    let file = write_export(MIXED_FORMAT_EXPORT);
    let mut stream = read_records(file.path()).unwrap();

    assert_eq!(stream.next().unwrap().line, 2);
    assert_eq!(stream.next().unwrap().line, 3);
    // Stop early; remaining rows are simply never decoded
    drop(stream);

    // A fresh pass requires re-opening the file
    let records: Vec<_> = read_records(file.path()).unwrap().collect();
    assert_eq!(records.len(), 3);
}
