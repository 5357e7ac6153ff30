//! Test infrastructure for the retrieval client
//!
//! Provides a scripted in-memory transport that records every requested URL
//! and replays a fixed sequence of responses.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::app::services::inat_api::{Transport, TransportResponse};
use crate::app::services::inat_api::types::{ApiObservation, ObservationsPage};
use crate::Result;

// Test modules
mod client_tests;

/// Transport that replays queued responses and records requested URLs
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<TransportResponse>>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response with the given status
    pub fn push_json(&self, status: u16, body: &ObservationsPage) {
        self.responses.borrow_mut().push_back(TransportResponse {
            status,
            body: serde_json::to_vec(body).unwrap(),
        });
    }

    /// Queue a raw response
    pub fn push_raw(&self, status: u16, body: Vec<u8>) {
        self.responses
            .borrow_mut()
            .push_back(TransportResponse { status, body });
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("mock transport ran out of scripted responses"))
    }
}

/// Build a page with `count` placeholder observations and the given total
pub fn page_of(count: usize, total_results: usize, page: usize) -> ObservationsPage {
    let results = (0..count)
        .map(|i| ApiObservation {
            id: Some((page * 1000 + i) as u64),
            species_guess: "Struthio camelus".to_string(),
            ..ApiObservation::default()
        })
        .collect();
    ObservationsPage {
        total_results,
        page,
        per_page: count,
        results,
    }
}
