//! Assets command: Macaulay Library media resolution

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use super::shared;
use crate::app::services::inat_api::HttpTransport;
use crate::app::services::ml_asset::download_ml_asset;
use crate::cli::args::AssetsArgs;
use crate::config::Config;
use crate::Result;

/// Run the assets command
pub fn run_assets(args: AssetsArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let transport = HttpTransport::new();
    let config = Config::default();

    let progress_bar = if args.show_progress() && args.asset_ids.len() > 1 {
        let pb = ProgressBar::new(args.asset_ids.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for asset_id in &args.asset_ids {
        if let Some(pb) = &progress_bar {
            pb.set_message(format!("ML asset {}", asset_id));
        }

        // One failed asset fails the command; each error names the id and URL
        let resolved = download_ml_asset(&transport, &config, asset_id)?;

        let kind = if resolved.is_photo { "photo" } else { "audio" };
        let line = format!("{}  {}  {}", asset_id, kind, resolved.path.display());
        match &progress_bar {
            Some(pb) => pb.println(line),
            None if !args.quiet => println!("{}", line),
            None => {}
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("done");
    }
    if !args.quiet {
        println!(
            "\n{} {} asset(s)",
            "Resolved".bright_green().bold(),
            args.asset_ids.len()
        );
    }

    Ok(())
}
