//! Test fixtures for export ingestion
//!
//! Provides export content builders and a tempfile helper shared across the
//! test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod column_map_tests;

/// Header row matching a current full export
pub fn full_header() -> &'static str {
    "Submission ID,Common Name,Scientific Name,Taxonomic Order,Count,\
     State/Province,County,Location ID,Location,Latitude,Longitude,Date,Time,\
     Protocol,Duration (Min),All Obs Reported,Distance Traveled (km),\
     Area Covered (ha),Number of Observers,Breeding Code,Observation Details,\
     Checklist Comments,ML Catalog Numbers"
}

/// A complete export with two data rows
pub fn full_export() -> String {
    format!(
        "{}\n\
         S100000001,Ostrich,Struthio camelus,1,2,ER,Anseba,L1000,Keren,15.78,38.45,2024-05-01,07:00 AM,Traveling,60,1,1.2,,2,,seen well,nice morning,123456 789012\n\
         S100000002,Mallard,Anas platyrhynchos,490,X,NY,Kings,L2000,Prospect Park,40.66,-73.97,5/1/2024,3:04 PM,Stationary,30,1,,,1,,,,\n",
        full_header()
    )
}

/// An export whose header omits several columns and reorders the rest
pub fn reordered_partial_export() -> String {
    "Scientific Name,Submission ID,Date,Count\n\
     Struthio camelus,S200000001,2024-05-01,3\n"
        .to_string()
}

/// An export where data rows are shorter than the header
pub fn short_row_export() -> String {
    format!(
        "{}\n\
         S300000001,Ostrich,Struthio camelus\n",
        full_header()
    )
}

/// Write export content to a temp file and return its handle
pub fn write_export(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
