//! Command-line argument definitions for birdfetch
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::API_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the birdfetch observation tool
///
/// Ingests eBird checklist exports, downloads iNaturalist observations, and
/// resolves Macaulay Library media to local files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "birdfetch",
    version,
    about = "Normalize eBird exports and iNaturalist observations into canonical records",
    long_about = "A tool for working with personal birding data. Reads MyEBirdData.csv \
                  checklist exports regardless of column layout, downloads all observations \
                  for an iNaturalist user through the paginated API, and resolves Macaulay \
                  Library media identifiers (photo or audio) to local files."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for birdfetch
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest a MyEBirdData.csv export into canonical records
    Ingest(IngestArgs),
    /// Download all observations for an iNaturalist user
    Fetch(FetchArgs),
    /// Resolve Macaulay Library asset ids to local media files
    Assets(AssetsArgs),
}

/// Arguments for the ingest command
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Path to the MyEBirdData.csv export file
    #[arg(value_name = "FILE", help = "Path to the MyEBirdData.csv export")]
    pub input_file: PathBuf,

    /// Output format for the ingested records
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Output file for ingested records
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for ingested records"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// iNaturalist user login to download observations for
    #[arg(
        short = 'u',
        long = "user",
        value_name = "LOGIN",
        help = "iNaturalist user login"
    )]
    pub user: String,

    /// Start of the observation date range (inclusive, YYYY-MM-DD)
    #[arg(
        long = "after",
        value_name = "DATE",
        help = "Only observations on or after this date (YYYY-MM-DD)"
    )]
    pub after: Option<String>,

    /// End of the observation date range (inclusive, YYYY-MM-DD)
    #[arg(
        long = "before",
        value_name = "DATE",
        help = "Only observations on or before this date (YYYY-MM-DD)"
    )]
    pub before: Option<String>,

    /// Response fields to populate (comma-separated list)
    ///
    /// If not specified, the server default field set is returned.
    #[arg(
        long = "fields",
        value_name = "LIST",
        help = "Comma-separated list of response fields to populate"
    )]
    pub fields: Option<FieldList>,

    /// Output file for downloaded observations
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for downloaded observations"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the assets command
#[derive(Debug, Clone, Parser)]
pub struct AssetsArgs {
    /// Macaulay Library asset ids to resolve (numbers only)
    #[arg(
        value_name = "ASSET_ID",
        num_args = 1..,
        help = "ML asset ids to resolve (numbers only)"
    )]
    pub asset_ids: Vec<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Wrapper for parsing comma-separated field projection lists
#[derive(Debug, Clone)]
pub struct FieldList {
    pub fields: Vec<String>,
}

impl FromStr for FieldList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if fields.is_empty() {
            return Err(Error::configuration(
                "Field list cannot be empty".to_string(),
            ));
        }

        Ok(FieldList { fields })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map a verbosity count and quiet flag to a log level name
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl IngestArgs {
    /// Validate the ingest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_file.display()
            )));
        }

        if !self.input_file.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_file.display()
            )));
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl FetchArgs {
    /// Validate the fetch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(Error::configuration(
                "User login cannot be empty".to_string(),
            ));
        }

        let (d1, d2) = self.date_range()?;
        if let (Some(d1), Some(d2)) = (d1, d2) {
            if d1 > d2 {
                return Err(Error::configuration(
                    "--after date must not be later than --before date".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Parse the optional date range bounds
    pub fn date_range(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
        let parse = |value: &str| {
            NaiveDate::parse_from_str(value, API_DATE_FORMAT).map_err(|_| {
                Error::configuration(format!("Invalid date '{}': expected YYYY-MM-DD", value))
            })
        };

        let d1 = self.after.as_deref().map(parse).transpose()?;
        let d2 = self.before.as_deref().map(parse).transpose()?;
        Ok((d1, d2))
    }

    /// Get the projection field list, if one was specified
    pub fn get_fields(&self) -> Vec<&str> {
        self.fields
            .as_ref()
            .map(|list| list.fields.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl AssetsArgs {
    /// Validate the assets command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for asset_id in &self.asset_ids {
            if asset_id.is_empty() || !asset_id.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::configuration(format!(
                    "Invalid ML asset id '{}': asset ids are numbers only",
                    asset_id
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show the progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
