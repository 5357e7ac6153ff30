//! iNaturalist observations API client
//!
//! Retrieves all observations for a user from the paginated observations
//! endpoint, with optional date-range filtering and field projection.
//!
//! ## Architecture
//!
//! - [`transport`] - Blocking request seam; production impl over reqwest
//! - [`types`] - Serde wire types for the observations response
//! - [`client`] - Page loop and termination logic
//!
//! The client is synchronous by design: this is a batch ingestion tool, and
//! one in-flight request at a time is the intended behavior.

pub mod client;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use client::Client;
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::{ApiObservation, ApiTaxon, ObservationsPage};
