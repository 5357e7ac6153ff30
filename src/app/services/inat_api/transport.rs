//! HTTP transport seam for remote retrieval
//!
//! The retrieval client and the asset resolver only need "send a GET, get the
//! status and body back". Everything else about the connection — reuse,
//! authentication, timeouts, retry policy — belongs to the transport
//! implementation, so the trait keeps those concerns out of the core and
//! lets tests substitute an in-memory transport.

use crate::{Error, Result};

/// Status and body of one completed request
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Full response body
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status is in the 2xx success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking request capability supplied to the retrieval client and the
/// asset resolver
pub trait Transport {
    /// Issue a GET request and return the response status and full body.
    ///
    /// A non-success status is returned as a normal response, not an error;
    /// callers decide which statuses are acceptable. Errors are reserved for
    /// failures to complete the exchange at all.
    fn get(&self, url: &str) -> Result<TransportResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        (**self).get(url)
    }
}

/// Production transport over a blocking reqwest client
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::transport(url, "request failed", Some(e)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| Error::transport(url, "failed to read response body", Some(e)))?
            .to_vec();
        Ok(TransportResponse { status, body })
    }
}
