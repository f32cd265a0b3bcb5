//! Test configuration constants for Hubtel client setup.
//!
//! Placeholder credential values used across all tests. None of these are
//! real credentials.

pub static TEST_HUBTEL_API_ID: &str = "hubtel_api_id";

pub static TEST_HUBTEL_API_KEY: &str = "hubtel_api_key";

pub static TEST_MERCHANT_ACCOUNT: &str = "000000";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/payment/callback";

pub static TEST_RETURN_URL: &str = "http://localhost:8080/payment/return";

pub static TEST_CANCELLATION_URL: &str = "http://localhost:8080/payment/cancelled";

pub static TEST_SMS_CLIENT_ID: &str = "sms_client_id";

pub static TEST_SMS_CLIENT_SECRET: &str = "sms_client_secret";

pub static TEST_SMS_SENDER: &str = "TESTSCHOOL";

/// Path the checkout endpoint is mounted on within the mock server.
pub static CHECKOUT_PATH: &str = "/items/initiate";

/// Path the transaction status endpoint is mounted on within the mock server.
pub static STATUS_PATH: &str = "/transactions/status";

/// Path the SMS endpoint is mounted on within the mock server.
pub static SMS_PATH: &str = "/v1/messages/send";
