//! Shared components for CLI commands
//!
//! Logging setup and output helpers used across the command implementations.

use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("birdfetch={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Write a serializable value as pretty JSON to a file or stdout
pub fn write_json<T: Serialize>(value: &T, output_file: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::json_output("failed to serialize results", e))?;

    match output_file {
        Some(path) => std::fs::write(path, json).map_err(|e| {
            Error::io(format!("failed to write output to {}", path.display()), e)
        })?,
        None => println!("{}", json),
    }

    Ok(())
}
