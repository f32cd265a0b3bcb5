use serde::{Deserialize, Serialize};

/// Outcome of a checkout initiation.
pub struct Checkout {
    pub checkout_url: String,
    pub checkout_id: String,
}

/// Provider-side status of a payment attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionStatus {
    Success,
    Failed,
    /// Any other provider status (unpaid, refunded, in progress); callers
    /// treat it as still pending.
    Other(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub total_amount: f64,
    pub description: String,
    pub callback_url: String,
    pub return_url: String,
    pub cancellation_url: String,
    pub merchant_account_number: String,
    pub client_reference: String,
}

#[derive(Deserialize)]
pub struct CheckoutResponse {
    pub data: Option<CheckoutResponseData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponseData {
    pub checkout_direct_url: String,
    pub checkout_id: String,
}

#[derive(Deserialize)]
pub struct StatusResponse {
    pub data: Option<StatusResponseData>,
}

#[derive(Deserialize)]
pub struct StatusResponseData {
    #[serde(rename = "TransactionStatus")]
    pub transaction_status: Option<String>,
}

#[derive(Deserialize)]
pub struct SmsResponse {
    pub status: i64,
}
