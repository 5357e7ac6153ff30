//! Ingest command: export file to canonical records

use colored::*;
use tracing::warn;

use super::shared;
use crate::app::services::ebird_export::read_records;
use crate::cli::args::{IngestArgs, OutputFormat};
use crate::Result;

/// Summary of one ingest run
#[derive(Debug, Default)]
struct IngestSummary {
    records: usize,
    valid_identities: usize,
    timestamp_failures: usize,
    records_with_media: usize,
}

/// Run the ingest command
pub fn run_ingest(args: IngestArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let stream = read_records(&args.input_file)?;

    let mut summary = IngestSummary::default();
    let mut records = Vec::new();

    for record in stream {
        summary.records += 1;

        if record.observation_id().is_valid() {
            summary.valid_identities += 1;
        }
        // Timestamp failures are scoped to the record, not the stream
        if let Err(e) = record.observed() {
            summary.timestamp_failures += 1;
            warn!("line {}: {}", record.line, e);
        }
        if !record.ml_asset_ids().is_empty() {
            summary.records_with_media += 1;
        }

        if matches!(args.output_format, OutputFormat::Json) {
            records.push(record);
        }
    }

    match args.output_format {
        OutputFormat::Json => {
            shared::write_json(&records, args.output_file.as_deref())?;
        }
        OutputFormat::Human => {
            if !args.quiet {
                print_summary(&args, &summary);
            }
        }
    }

    Ok(())
}

fn print_summary(args: &IngestArgs, summary: &IngestSummary) {
    println!(
        "\n{} {}",
        "Ingested".bright_green().bold(),
        args.input_file.display()
    );
    println!(
        "  Records:                {}",
        summary.records.to_string().bright_white().bold()
    );
    println!(
        "  Valid identities:       {}",
        summary.valid_identities.to_string().bright_white().bold()
    );
    println!(
        "  Records with media:     {}",
        summary.records_with_media.to_string().bright_white().bold()
    );
    if summary.timestamp_failures > 0 {
        println!(
            "  Timestamp failures:     {}",
            summary.timestamp_failures.to_string().bright_red().bold()
        );
    }
}
