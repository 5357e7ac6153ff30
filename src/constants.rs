//! Application constants for birdfetch
//!
//! This module contains endpoint locations, default values, and the export
//! column names used throughout the application.

// =============================================================================
// Remote Endpoints
// =============================================================================

/// Base URL for the iNaturalist API
pub const INAT_API_BASE_URL: &str = "https://api.inaturalist.org/v1";

/// Observations path under the API base
pub const OBSERVATIONS_PATH: &str = "/observations";

/// Base URL for Macaulay Library asset downloads
pub const ML_ASSET_BASE_URL: &str = "https://cdn.download.ams.birds.cornell.edu/api/v2/asset";

/// Photo rendition requested from the asset CDN (2400px)
pub const ML_PHOTO_RENDITION: &str = "2400";

/// Audio rendition path suffix on the asset CDN
pub const ML_AUDIO_RENDITION: &str = "mp3";

/// Base URL for eBird checklist pages
pub const CHECKLIST_BASE_URL: &str = "https://ebird.org/checklist/";

// =============================================================================
// Retrieval Configuration
// =============================================================================

/// Results per page for observation downloads.
///
/// The iNaturalist API recommended practices favor the highest supported
/// per_page value over many small requests; 200 is the documented maximum
/// for the observations endpoint.
pub const PER_PAGE: usize = 200;

/// Taxonomic class filter applied to every observations request
pub const ICONIC_TAXON: &str = "Aves";

/// Date format for the d1/d2 range parameters
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Observation Defaults
// =============================================================================

/// Default positional accuracy in meters for eBird observations.
///
/// Approximates the radius of a typical eBird hotspot; used when a
/// place-based record needs a location uncertainty value.
pub const POSITIONAL_ACCURACY_METERS: u32 = 1000;

/// Count value meaning "present, uncounted" in export rows
pub const COUNT_PRESENT_MARKER: &str = "X";

// =============================================================================
// Asset Resolution
// =============================================================================

/// Number of leading bytes inspected for image signature detection
pub const SNIFF_BUFFER_LEN: usize = 512;

/// Extension applied to audio assets without sniffing
pub const AUDIO_EXTENSION: &str = ".mp3";

/// Prefix for scratch files created during asset downloads
pub const ASSET_TEMP_PREFIX: &str = "birdfetch";

// =============================================================================
// Export Column Names
// =============================================================================

/// Column names in MyEBirdData.csv exports.
///
/// Order and presence are not fixed across export versions; every access
/// goes through the column map rather than a positional index.
pub mod columns {
    pub const SUBMISSION_ID: &str = "Submission ID";
    pub const COMMON_NAME: &str = "Common Name";
    pub const SCIENTIFIC_NAME: &str = "Scientific Name";
    pub const TAXONOMIC_ORDER: &str = "Taxonomic Order";
    pub const COUNT: &str = "Count";
    pub const STATE_PROVINCE: &str = "State/Province";
    pub const COUNTY: &str = "County";
    pub const LOCATION_ID: &str = "Location ID";
    pub const LOCATION: &str = "Location";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const DATE: &str = "Date";
    pub const TIME: &str = "Time";
    pub const PROTOCOL: &str = "Protocol";
    pub const DURATION_MIN: &str = "Duration (Min)";
    pub const ALL_OBS_REPORTED: &str = "All Obs Reported";
    pub const DISTANCE_TRAVELED_KM: &str = "Distance Traveled (km)";
    pub const AREA_COVERED_HA: &str = "Area Covered (ha)";
    pub const NUMBER_OF_OBSERVERS: &str = "Number of Observers";
    pub const BREEDING_CODE: &str = "Breeding Code";
    pub const OBSERVATION_DETAILS: &str = "Observation Details";
    pub const CHECKLIST_COMMENTS: &str = "Checklist Comments";
    pub const ML_CATALOG_NUMBERS: &str = "ML Catalog Numbers";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the checklist page URL for a submission id
pub fn checklist_url(submission_id: &str) -> String {
    format!("{}{}", CHECKLIST_BASE_URL, submission_id)
}

/// Build the photo rendition URL for an ML asset id
pub fn ml_photo_url(base_url: &str, asset_id: &str) -> String {
    format!("{}/{}/{}", base_url, asset_id, ML_PHOTO_RENDITION)
}

/// Build the audio rendition URL for an ML asset id
pub fn ml_audio_url(base_url: &str, asset_id: &str) -> String {
    format!("{}/{}/{}", base_url, asset_id, ML_AUDIO_RENDITION)
}
