//! MyEBirdData.csv export ingestion
//!
//! Parses eBird checklist exports into a stream of canonical [`Record`]s.
//! The export format fixes neither column order nor column presence, and
//! individual rows may carry fewer cells than the header, so all field
//! access is by name through a per-file column map.
//!
//! ## Architecture
//!
//! - [`column_map`] - Header analysis and bounds-checked field lookup
//! - [`record_decoder`] - One row + column map into a [`Record`]
//! - [`reader`] - File loading and the single-pass record stream
//!
//! ## Usage
//!
//! ```no_run
//! use birdfetch::app::services::ebird_export::read_records;
//!
//! # fn example() -> birdfetch::Result<()> {
//! for record in read_records(std::path::Path::new("MyEBirdData.csv"))? {
//!     println!("line {}: {}", record.line, record.observation_id());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Record`]: crate::app::models::Record

pub mod column_map;
pub mod record_decoder;
pub mod reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_map::ColumnMap;
pub use reader::{read_records, RecordStream};
pub use record_decoder::decode_record;
