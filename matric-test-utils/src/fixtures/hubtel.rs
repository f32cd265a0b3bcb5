//! Mock Hubtel endpoints for tests.
//!
//! Paths here match the URLs the test Hubtel client is built with in
//! [`crate::setup::TestSetup`].

use mockito::{Matcher, Mock, ServerGuard};

use crate::constant::{CHECKOUT_PATH, SMS_PATH, STATUS_PATH};

/// Mount a successful checkout initiation endpoint.
pub fn mock_checkout_endpoint(
    server: &mut ServerGuard,
    checkout_id: &str,
    expected_requests: usize,
) -> Mock {
    let body = serde_json::json!({
        "data": {
            "checkoutDirectUrl": format!("{}/pay/{}", server.url(), checkout_id),
            "checkoutId": checkout_id,
        }
    });

    server
        .mock("POST", CHECKOUT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create()
}

/// Mount a transaction status endpoint answering with the given provider
/// status, e.g. `"Success"`, `"Failed"`, or `"Unpaid"`.
pub fn mock_status_endpoint(
    server: &mut ServerGuard,
    client_reference: &str,
    transaction_status: &str,
    expected_requests: usize,
) -> Mock {
    let body = serde_json::json!({
        "data": {
            "TransactionStatus": transaction_status,
        }
    });

    server
        .mock("GET", STATUS_PATH)
        .match_query(Matcher::UrlEncoded(
            "clientReference".to_string(),
            client_reference.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create()
}

/// Mount an SMS endpoint that accepts any message.
pub fn mock_sms_endpoint(server: &mut ServerGuard, expected_requests: usize) -> Mock {
    server
        .mock("GET", SMS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": 0}"#)
        .expect(expected_requests)
        .create()
}

/// Mount an SMS endpoint whose gateway rejects every message.
pub fn mock_sms_rejected_endpoint(server: &mut ServerGuard, expected_requests: usize) -> Mock {
    server
        .mock("GET", SMS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": 5}"#)
        .expect(expected_requests)
        .create()
}
