//! Data models for birding observation records
//!
//! This module contains the core data structures for representing observation
//! rows from eBird checklist exports and the composite identity that names a
//! single observation across tools.

use crate::app::services::observed_at;
use crate::constants::{self, COUNT_PRESENT_MARKER};
use crate::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Export Record
// =============================================================================

/// One observation row from a MyEBirdData.csv export.
///
/// Every string field holds the raw cell value from the export. A field whose
/// column is absent from the export header, or whose row is shorter than the
/// header, is the empty string; decoding never fails on missing columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Line in the export file (1-indexed; the header is line 1)
    pub line: usize,

    /// Checklist submission id, including the leading "S"
    pub submission_id: String,

    /// Common (vernacular) species name
    pub common_name: String,

    /// Scientific name, including eBird qualifiers (hybrids, slashes, spuhs)
    pub scientific_name: String,

    /// eBird taxonomic sort order
    pub taxonomic_order: String,

    /// Individual count: "X" for present-but-uncounted, else an integer string
    pub count: String,

    /// State or province of the observation location
    pub state_province: String,

    /// County of the observation location
    pub county: String,

    /// eBird location identifier
    pub location_id: String,

    /// Human-readable location name
    pub location: String,

    /// Latitude as a decimal string
    pub latitude: String,

    /// Longitude as a decimal string
    pub longitude: String,

    /// Observation date string (YYYY-MM-DD or M/D/YYYY depending on the export)
    pub date: String,

    /// Observation start time (e.g. "07:00 AM"); empty when not recorded
    pub time: String,

    /// Checklist protocol (e.g. "Traveling", "Stationary")
    pub protocol: String,

    /// Checklist duration in minutes
    pub duration_min: String,

    /// "1" when all observed species were reported
    pub all_obs_reported: String,

    /// Distance traveled in kilometers
    pub distance_traveled_km: String,

    /// Area covered in hectares
    pub area_covered_ha: String,

    /// Number of observers on the checklist
    pub number_of_observers: String,

    /// eBird breeding code, if any
    pub breeding_code: String,

    /// Free-text details for this observation
    pub observation_details: String,

    /// Free-text comments for the whole checklist
    pub checklist_comments: String,

    /// Whitespace-delimited Macaulay Library catalog numbers
    pub ml_catalog_numbers: String,
}

impl Record {
    /// URL of the checklist page this observation belongs to
    pub fn url(&self) -> String {
        constants::checklist_url(&self.submission_id)
    }

    /// Checklist URL annotated with the species, for diagnostics
    pub fn url_with_species(&self) -> String {
        format!(
            "{} [{}] ({})",
            self.url(),
            self.scientific_name,
            self.common_name
        )
    }

    /// The observation instant for this record.
    ///
    /// The record always includes the date but might not include the time,
    /// and the date/time formats vary between exporting clients. Resolution
    /// failures are scoped to this record and do not affect the stream.
    pub fn observed(&self) -> Result<NaiveDateTime> {
        observed_at::resolve_observed(&self.date, &self.time)
    }

    /// Composite identity for this observation
    pub fn observation_id(&self) -> ObservationId {
        ObservationId {
            submission_id: self.submission_id.clone(),
            scientific_name: self.scientific_name.clone(),
        }
    }

    /// Macaulay Library asset ids referenced by this record
    pub fn ml_asset_ids(&self) -> Vec<&str> {
        self.ml_catalog_numbers.split_whitespace().collect()
    }

    /// Numeric individual count, or None for the "X" present-but-uncounted
    /// marker and for rows without a usable count
    pub fn count_value(&self) -> Option<u32> {
        if self.count == COUNT_PRESENT_MARKER {
            return None;
        }
        self.count.parse().ok()
    }
}

// =============================================================================
// Observation Identity
// =============================================================================

/// Identifies a unique eBird observation as a submission id plus eBird's
/// scientific name.
///
/// EBird's scientific names may differ from other taxonomies, notably for
/// "slashes" and "spuhs"; they are carried opaquely, never normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationId {
    /// Checklist submission id, including the leading "S".
    /// Example: "S193523301"
    pub submission_id: String,

    /// Scientific name examples:
    /// - "Struthio camelus"
    /// - "Cairina moschata (Domestic type)"
    /// - "Anas platyrhynchos x rubripes"
    /// - "Aythya marila/affinis"
    /// - "Melanitta sp."
    pub scientific_name: String,
}

impl ObservationId {
    /// Whether this observation id has all fields set
    pub fn is_valid(&self) -> bool {
        !self.submission_id.is_empty() && !self.scientific_name.is_empty()
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.submission_id, self.scientific_name)
    }
}
