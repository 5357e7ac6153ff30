//! Birdfetch Library
//!
//! A Rust library for normalizing birding records from eBird checklist exports
//! and the iNaturalist observations API into a canonical record stream.
//!
//! This library provides tools for:
//! - Parsing `MyEBirdData.csv` exports whose column order and presence vary
//! - Resolving the mixed date/time formats found in real-world exports
//! - Deriving a composite observation identity per record
//! - Downloading all observations for a user from the paginated iNaturalist API
//! - Resolving Macaulay Library media identifiers (photo or audio) to local files
//! - Comprehensive error handling with operation context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod ebird_export;
        pub mod inat_api;
        pub mod ml_asset;
        pub mod observed_at;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ObservationId, Record};
pub use config::Config;

/// Result type alias for birdfetch
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for export ingestion, remote retrieval, and asset resolution
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Export file contained no rows at all (not even a header)
    #[error("No records found in export file '{file}'")]
    EmptyExport { file: String },

    /// Date/time string matched none of the recognized export layouts
    #[error("Unrecognized date/time '{value}': tried layouts {attempted}")]
    TimestampFormat { value: String, attempted: String },

    /// HTTP transport failure
    #[error("Transport error for {url}: {message}")]
    Transport {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Remote endpoint returned a non-success status
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response body failed to decode as the expected JSON shape
    #[error("Failed to decode response from {url}: {message}")]
    ApiDecode {
        url: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Neither asset rendition could be retrieved, or the download failed
    #[error("Failed to retrieve ML asset {asset_id} from {url}: {message}")]
    AssetRetrieval {
        asset_id: String,
        url: String,
        message: String,
    },

    /// Downloaded photo bytes matched no known image signature
    #[error("Could not determine file extension for ML asset {asset_id}: {message}")]
    ContentType { asset_id: String, message: String },

    /// JSON serialization error when writing output
    #[error("JSON output error: {message}")]
    JsonOutput {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty-export error
    pub fn empty_export(file: impl Into<String>) -> Self {
        Self::EmptyExport { file: file.into() }
    }

    /// Create a timestamp format error naming the layouts that were attempted
    pub fn timestamp_format(value: impl Into<String>, attempted: &[&str]) -> Self {
        Self::TimestampFormat {
            value: value.into(),
            attempted: attempted.join(", "),
        }
    }

    /// Create a transport error with context
    pub fn transport(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unexpected-status error
    pub fn unexpected_status(url: impl Into<String>, status: u16) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status,
        }
    }

    /// Create an API decode error with context
    pub fn api_decode(
        url: impl Into<String>,
        message: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::ApiDecode {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an asset retrieval error carrying the identifier and URL attempted
    pub fn asset_retrieval(
        asset_id: impl Into<String>,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::AssetRetrieval {
            asset_id: asset_id.into(),
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a content-type detection error
    pub fn content_type(asset_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContentType {
            asset_id: asset_id.into(),
            message: message.into(),
        }
    }

    /// Create a JSON output error
    pub fn json_output(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonOutput {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
