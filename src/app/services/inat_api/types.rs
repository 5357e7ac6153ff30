//! Wire types for the iNaturalist observations endpoint
//!
//! These mirror the subset of the JSON response the tool consumes; unknown
//! fields are ignored and absent fields default, since the API adds fields
//! freely and the `fields` projection parameter can strip most of them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One page of observation results plus the server-reported totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationsPage {
    /// Total results matching the query across all pages
    #[serde(default)]
    pub total_results: usize,

    /// 1-based page number of this response
    #[serde(default)]
    pub page: usize,

    /// Page size the server applied
    #[serde(default)]
    pub per_page: usize,

    /// Observations on this page
    #[serde(default)]
    pub results: Vec<ApiObservation>,
}

/// One observation as returned by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiObservation {
    /// Numeric observation id
    #[serde(default)]
    pub id: Option<u64>,

    /// Stable observation UUID
    #[serde(default)]
    pub uuid: Option<Uuid>,

    /// Observation date as reported (ISO date string)
    #[serde(default)]
    pub observed_on: Option<String>,

    /// Observer's free-form species guess
    #[serde(default)]
    pub species_guess: String,

    /// Free-form observation description
    #[serde(default)]
    pub description: String,

    /// Whether the observation is marked captive/cultivated
    #[serde(default)]
    pub captive: bool,

    /// Identified taxon, when the observation has one
    #[serde(default)]
    pub taxon: Option<ApiTaxon>,
}

/// Taxon subset attached to an observation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiTaxon {
    /// Numeric taxon id
    #[serde(default)]
    pub id: Option<u64>,

    /// Scientific name
    #[serde(default)]
    pub name: String,

    /// Vernacular name in the requesting locale
    #[serde(default)]
    pub preferred_common_name: String,
}
