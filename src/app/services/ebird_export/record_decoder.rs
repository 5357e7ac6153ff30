//! Decoding of individual export rows into canonical records
//!
//! Every semantic field is looked up by column name through the map; a field
//! whose column is missing, or whose row ends before its index, decodes to
//! the empty string. A row is never rejected for being short.

use csv::StringRecord;

use super::column_map::ColumnMap;
use crate::app::models::Record;
use crate::constants::columns;

/// Decode one data row into a [`Record`].
///
/// `line` is the 1-indexed position in the export file (the header is
/// line 1, so the first data row is line 2).
pub fn decode_record(line: usize, row: &StringRecord, map: &ColumnMap) -> Record {
    let field = |name: &str| map.get(row, name).to_string();

    Record {
        line,
        submission_id: field(columns::SUBMISSION_ID),
        common_name: field(columns::COMMON_NAME),
        scientific_name: field(columns::SCIENTIFIC_NAME),
        taxonomic_order: field(columns::TAXONOMIC_ORDER),
        count: field(columns::COUNT),
        state_province: field(columns::STATE_PROVINCE),
        county: field(columns::COUNTY),
        location_id: field(columns::LOCATION_ID),
        location: field(columns::LOCATION),
        latitude: field(columns::LATITUDE),
        longitude: field(columns::LONGITUDE),
        date: field(columns::DATE),
        time: field(columns::TIME),
        protocol: field(columns::PROTOCOL),
        duration_min: field(columns::DURATION_MIN),
        all_obs_reported: field(columns::ALL_OBS_REPORTED),
        distance_traveled_km: field(columns::DISTANCE_TRAVELED_KM),
        area_covered_ha: field(columns::AREA_COVERED_HA),
        number_of_observers: field(columns::NUMBER_OF_OBSERVERS),
        breeding_code: field(columns::BREEDING_CODE),
        observation_details: field(columns::OBSERVATION_DETAILS),
        checklist_comments: field(columns::CHECKLIST_COMMENTS),
        ml_catalog_numbers: field(columns::ML_CATALOG_NUMBERS),
    }
}
