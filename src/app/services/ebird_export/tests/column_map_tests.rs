//! Tests for header analysis and bounds-checked lookup

use csv::StringRecord;

use crate::app::services::ebird_export::ColumnMap;

fn record_of(fields: &[&str]) -> StringRecord {
    let mut record = StringRecord::new();
    for field in fields {
        record.push_field(field);
    }
    record
}

#[test]
fn test_maps_names_to_indices() {
    let header = record_of(&["Submission ID", "Common Name", "Date"]);
    let map = ColumnMap::from_header(&header);

    assert_eq!(map.len(), 3);
    assert_eq!(map.index_of("Submission ID"), Some(0));
    assert_eq!(map.index_of("Common Name"), Some(1));
    assert_eq!(map.index_of("Date"), Some(2));
    assert_eq!(map.index_of("County"), None);
}

#[test]
fn test_empty_header_yields_empty_map() {
    let map = ColumnMap::from_header(&StringRecord::new());
    assert!(map.is_empty());
    assert_eq!(map.get(&record_of(&["a", "b"]), "Date"), "");
}

#[test]
fn test_duplicate_header_last_occurrence_wins() {
    let header = record_of(&["Date", "Count", "Date"]);
    let map = ColumnMap::from_header(&header);

    assert_eq!(map.index_of("Date"), Some(2));
    let row = record_of(&["2024-05-01", "3", "5/1/2024"]);
    assert_eq!(map.get(&row, "Date"), "5/1/2024");
}

#[test]
fn test_lookup_of_missing_column_is_empty() {
    let header = record_of(&["Date"]);
    let map = ColumnMap::from_header(&header);
    let row = record_of(&["2024-05-01"]);

    assert_eq!(map.get(&row, "Count"), "");
}

#[test]
fn test_lookup_beyond_row_length_is_empty() {
    // Rows may carry fewer cells than the header names
    let header = record_of(&["Submission ID", "Common Name", "Date"]);
    let map = ColumnMap::from_header(&header);
    let row = record_of(&["S1"]);

    assert_eq!(map.get(&row, "Submission ID"), "S1");
    assert_eq!(map.get(&row, "Common Name"), "");
    assert_eq!(map.get(&row, "Date"), "");
}
