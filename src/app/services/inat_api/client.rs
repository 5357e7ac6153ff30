//! Paginated observation retrieval
//!
//! Downloads every observation matching a user query by walking the pages of
//! the observations endpoint until the server-reported total is satisfied.
//! Transport and decode failures abort the whole fetch; a partial page set is
//! not a usable result at this layer.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::transport::Transport;
use super::types::{ApiObservation, ObservationsPage};
use crate::config::Config;
use crate::constants::{API_DATE_FORMAT, ICONIC_TAXON, OBSERVATIONS_PATH, PER_PAGE};
use crate::{Error, Result};

/// Client for the observations endpoint
pub struct Client<T: Transport> {
    config: Config,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Create a client over the given endpoint configuration and transport
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Download all observations for a user.
    ///
    /// `d1` and `d2` bound the observation date range inclusively when set;
    /// `None` leaves that end unbounded. `fields` names the response fields
    /// to populate; an empty slice requests the server default.
    ///
    /// Pagination stops when the accumulated count reaches the total the
    /// server reported on the first non-empty page, or when a page yields no
    /// new results. The second check looks redundant but guards against
    /// stale total counts, which this API has been observed to report.
    pub fn download_observations(
        &self,
        user_id: &str,
        d1: Option<NaiveDate>,
        d2: Option<NaiveDate>,
        fields: &[&str],
    ) -> Result<Vec<ApiObservation>> {
        let after = d1
            .map(|d| format!(" after {}", d.format(API_DATE_FORMAT)))
            .unwrap_or_default();
        let before = d2
            .map(|d| format!(" before {}", d.format(API_DATE_FORMAT)))
            .unwrap_or_default();
        info!("Downloading observations for {}{}{}", user_id, after, before);

        let mut results: Vec<ApiObservation> = Vec::new();
        let mut total_results = 0usize;

        for page in 1.. {
            let url = self.observations_url(user_id, page, d1, d2, fields)?;
            debug!("Requesting page {}: {}", page, url);

            let response = self.transport.get(url.as_str())?;
            if !response.is_success() {
                return Err(Error::unexpected_status(url, response.status));
            }

            let page_data: ObservationsPage =
                serde_json::from_slice(&response.body).map_err(|e| {
                    Error::api_decode(url.clone(), "invalid observations payload", e)
                })?;

            if page_data.total_results == 0 {
                break;
            }
            if total_results == 0 {
                // first non-empty page
                total_results = page_data.total_results;
            }

            let added = page_data.results.len();
            results.extend(page_data.results);
            info!(
                "Downloaded {} of {} observations",
                results.len(),
                total_results
            );

            if results.len() >= total_results {
                break;
            }
            if added == 0 {
                warn!(
                    "Server reported {} total results but page {} added none; stopping at {}",
                    total_results,
                    page,
                    results.len()
                );
                break;
            }
        }

        Ok(results)
    }

    /// Build the observations request URL for one page
    fn observations_url(
        &self,
        user_id: &str,
        page: usize,
        d1: Option<NaiveDate>,
        d2: Option<NaiveDate>,
        fields: &[&str],
    ) -> Result<String> {
        let base = format!("{}{}", self.config.api_base_url, OBSERVATIONS_PATH);
        let mut url = reqwest::Url::parse(&base).map_err(|e| {
            Error::configuration(format!("invalid API base URL '{}': {}", base, e))
        })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("user_id", user_id);
            query.append_pair("page", &page.to_string());
            query.append_pair("per_page", &PER_PAGE.to_string());
            query.append_pair("iconic_taxa[]", ICONIC_TAXON);
            if let Some(d1) = d1 {
                query.append_pair("d1", &d1.format(API_DATE_FORMAT).to_string());
            }
            if let Some(d2) = d2 {
                query.append_pair("d2", &d2.format(API_DATE_FORMAT).to_string());
            }
            if !fields.is_empty() {
                query.append_pair("fields", &fields.join(","));
            }
        }

        Ok(url.into())
    }
}
