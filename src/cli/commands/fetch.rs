//! Fetch command: paginated observation download

use tracing::info;

use super::shared;
use crate::app::services::inat_api::{Client, HttpTransport};
use crate::cli::args::FetchArgs;
use crate::config::Config;
use crate::Result;

/// Run the fetch command
pub fn run_fetch(args: FetchArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let (d1, d2) = args.date_range()?;
    let client = Client::new(Config::default(), HttpTransport::new());

    let observations = client.download_observations(&args.user, d1, d2, &args.get_fields())?;
    info!(
        "Fetched {} observations for {}",
        observations.len(),
        args.user
    );

    shared::write_json(&observations, args.output_file.as_deref())
}
