//! Configuration management for remote endpoints.
//!
//! Provides the configuration structure shared by the retrieval client and
//! the asset resolver. Defaults point at the production endpoints; tests and
//! alternate deployments override them with the builder methods.

use crate::constants::{INAT_API_BASE_URL, ML_ASSET_BASE_URL};
use serde::{Deserialize, Serialize};

/// Endpoint configuration for remote retrieval and asset resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL for the iNaturalist API
    pub api_base_url: String,

    /// Base URL for Macaulay Library asset downloads
    pub asset_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: INAT_API_BASE_URL.to_string(),
            asset_base_url: ML_ASSET_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Create configuration with a custom API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Create configuration with a custom asset base URL
    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = url.into();
        self
    }
}
