//! Macaulay Library media resolution
//!
//! Resolves opaque numeric ML asset ids to local media files. The id alone
//! does not say whether the asset is a photo or a sound, so resolution is a
//! two-probe state machine with byte-level content sniffing for photos.
//!
//! ## Architecture
//!
//! - [`resolver`] - Probe ordering, download, and file finalization
//! - [`sniff`] - Ordered image signature table for extension selection

pub mod resolver;
pub mod sniff;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use resolver::{download_ml_asset, ResolvedAsset};
