//! Macaulay Library asset resolution
//!
//! An ML asset id does not say whether it names a photo or a sound, so the
//! resolver probes the photo rendition first and falls back to the audio
//! rendition on a 404. The downloaded bytes land in a scratch file that is
//! renamed into place once the extension is known; the file itself is the
//! function's output and is left for the environment to reclaim.

use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use super::sniff;
use crate::app::services::inat_api::Transport;
use crate::config::Config;
use crate::constants::{self, ASSET_TEMP_PREFIX, AUDIO_EXTENSION, SNIFF_BUFFER_LEN};
use crate::{Error, Result};

/// HTTP status meaning "not this rendition kind"
const STATUS_NOT_FOUND: u16 = 404;

/// A media asset resolved to a local file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Local path of the downloaded file, extension included.
    /// The file is temporary and may be deleted at any time.
    pub path: PathBuf,

    /// Whether the photo rendition was retrieved (false means audio)
    pub is_photo: bool,

    /// Extension chosen for the file, including the dot
    pub extension: &'static str,
}

/// Download the photo or sound with the provided ML asset id (numbers only).
///
/// The photo rendition is probed first; a 404 there switches to the audio
/// rendition, which must then succeed. Photo bytes are sniffed for their
/// image signature to pick the extension; audio always gets `.mp3`. Every
/// failure names the asset id and the URL that was being fetched.
pub fn download_ml_asset(
    transport: &dyn Transport,
    config: &Config,
    asset_id: &str,
) -> Result<ResolvedAsset> {
    let mut url = constants::ml_photo_url(&config.asset_base_url, asset_id);
    let mut response = transport.get(&url)?;
    let is_photo = response.is_success();

    if response.status == STATUS_NOT_FOUND {
        // Photo not found; try fetching it as a sound
        debug!("ML asset {} has no photo rendition, probing audio", asset_id);
        url = constants::ml_audio_url(&config.asset_base_url, asset_id);
        response = transport.get(&url)?;
    }
    if !response.is_success() {
        return Err(Error::asset_retrieval(
            asset_id,
            &url,
            format!("status {}", response.status),
        ));
    }

    let extension = if is_photo {
        let prefix = &response.body[..response.body.len().min(SNIFF_BUFFER_LEN)];
        let signature = sniff::detect_image(prefix).ok_or_else(|| {
            Error::content_type(
                asset_id,
                format!(
                    "leading bytes match none of the known formats ({})",
                    sniff::known_formats()
                ),
            )
        })?;
        signature.extension
    } else {
        AUDIO_EXTENSION
    };

    let mut scratch = tempfile::Builder::new()
        .prefix(ASSET_TEMP_PREFIX)
        .tempfile()
        .map_err(|e| Error::io(format!("failed to create temp file for ML asset {}", asset_id), e))?;
    scratch.write_all(&response.body).map_err(|e| {
        Error::io(
            format!("failed to write ML asset {} data to temp file", asset_id),
            e,
        )
    })?;

    // Rename to a sibling path carrying the resolved extension. persist()
    // consumes the handle, so the scratch file is never left half-claimed.
    let mut with_extension = scratch.path().as_os_str().to_os_string();
    with_extension.push(extension);
    let path = PathBuf::from(with_extension);
    scratch.persist(&path).map_err(|e| {
        Error::io(
            format!(
                "failed to rename ML asset {} into {}",
                asset_id,
                path.display()
            ),
            e.error,
        )
    })?;

    info!(
        "Downloaded ML asset {} ({}) to {}",
        asset_id,
        if is_photo { "photo" } else { "audio" },
        path.display()
    );

    Ok(ResolvedAsset {
        path,
        is_photo,
        extension,
    })
}
