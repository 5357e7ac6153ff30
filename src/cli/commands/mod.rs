//! Command implementations for the birdfetch CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod assets;
pub mod fetch;
pub mod ingest;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for birdfetch
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `ingest`: export file to canonical record stream
/// - `fetch`: paginated observation download
/// - `assets`: Macaulay Library media resolution
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Ingest(ingest_args) => ingest::run_ingest(ingest_args),
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args),
        Commands::Assets(assets_args) => assets::run_assets(assets_args),
    }
}
