//! Tests for pagination termination and request construction

use chrono::NaiveDate;

use super::{page_of, MockTransport};
use crate::app::services::inat_api::Client;
use crate::config::Config;
use crate::Error;

fn client(transport: &MockTransport) -> Client<&MockTransport> {
    Client::new(Config::default(), transport)
}

#[test]
fn test_zero_total_stops_after_one_request() {
    let transport = MockTransport::new();
    transport.push_json(200, &page_of(0, 0, 1));

    let results = client(&transport)
        .download_observations("testuser", None, None, &[])
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn test_total_250_takes_exactly_two_requests() {
    let transport = MockTransport::new();
    transport.push_json(200, &page_of(200, 250, 1));
    transport.push_json(200, &page_of(50, 250, 2));

    let results = client(&transport)
        .download_observations("testuser", None, None, &[])
        .unwrap();

    assert_eq!(results.len(), 250);
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn test_stale_total_terminates_on_empty_page() {
    // Server claims 400 results but dries up after the first page
    let transport = MockTransport::new();
    transport.push_json(200, &page_of(200, 400, 1));
    transport.push_json(200, &page_of(0, 400, 2));

    let results = client(&transport)
        .download_observations("testuser", None, None, &[])
        .unwrap();

    assert_eq!(results.len(), 200);
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn test_single_page_exact_total() {
    let transport = MockTransport::new();
    transport.push_json(200, &page_of(37, 37, 1));

    let results = client(&transport)
        .download_observations("testuser", None, None, &[])
        .unwrap();

    assert_eq!(results.len(), 37);
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn test_request_carries_fixed_parameters() {
    let transport = MockTransport::new();
    transport.push_json(200, &page_of(0, 0, 1));

    client(&transport)
        .download_observations("testuser", None, None, &[])
        .unwrap();

    let url = &transport.requests()[0];
    assert!(url.starts_with("https://api.inaturalist.org/v1/observations?"));
    assert!(url.contains("user_id=testuser"));
    assert!(url.contains("page=1"));
    assert!(url.contains("per_page=200"));
    assert!(url.contains("iconic_taxa%5B%5D=Aves"));
    assert!(!url.contains("d1="));
    assert!(!url.contains("fields="));
}

#[test]
fn test_request_carries_range_and_projection() {
    let transport = MockTransport::new();
    transport.push_json(200, &page_of(0, 0, 1));

    client(&transport)
        .download_observations(
            "testuser",
            NaiveDate::from_ymd_opt(2024, 5, 1),
            NaiveDate::from_ymd_opt(2024, 6, 30),
            &["id", "observed_on"],
        )
        .unwrap();

    let url = &transport.requests()[0];
    assert!(url.contains("d1=2024-05-01"));
    assert!(url.contains("d2=2024-06-30"));
    assert!(url.contains("fields=id%2Cobserved_on"));
}

#[test]
fn test_non_success_status_aborts_fetch() {
    let transport = MockTransport::new();
    transport.push_raw(503, b"unavailable".to_vec());

    let err = client(&transport)
        .download_observations("testuser", None, None, &[])
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UnexpectedStatus { status: 503, .. }
    ));
}

#[test]
fn test_undecodable_body_aborts_fetch() {
    let transport = MockTransport::new();
    transport.push_raw(200, b"<html>not json</html>".to_vec());

    let err = client(&transport)
        .download_observations("testuser", None, None, &[])
        .unwrap_err();

    assert!(matches!(err, Error::ApiDecode { .. }));
}
