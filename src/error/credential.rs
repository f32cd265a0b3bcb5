use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Candidate with index number {0:?} not found")]
    CandidateNotFound(String),
    #[error("Candidate with index number {0:?} has not paid the application fee")]
    FeeNotPaid(String),
    #[error("Candidate with index number {0:?} has no serial number to recover a PIN for")]
    NoSerialIssued(String),
    #[error("Candidate with index number {0:?} has no phone number on record")]
    NoPhoneNumber(String),
    #[error("SMS delivery failed for index number {0:?}")]
    SmsDeliveryFailed(String),
}

impl IntoResponse for CredentialError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::CandidateNotFound(_) => {
                (StatusCode::NOT_FOUND, "Candidate not found".to_string())
            }
            Self::FeeNotPaid(_) => (
                StatusCode::BAD_REQUEST,
                "Application fee has not been paid".to_string(),
            ),
            Self::NoSerialIssued(_) => (
                StatusCode::BAD_REQUEST,
                "No credentials have been issued for this index number".to_string(),
            ),
            Self::NoPhoneNumber(_) => (
                StatusCode::BAD_REQUEST,
                "No phone number on record for this index number".to_string(),
            ),
            Self::SmsDeliveryFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send credentials by SMS, please try again".to_string(),
            ),
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
