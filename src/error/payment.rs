use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment with client reference {0:?} not found")]
    PaymentNotFound(String),
    #[error("Candidate with index number {0:?} not found for payment")]
    UnknownIndexNumber(String),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::PaymentNotFound(_) => (StatusCode::NOT_FOUND, "Payment not found".to_string()),
            Self::UnknownIndexNumber(_) => {
                (StatusCode::NOT_FOUND, "Candidate not found".to_string())
            }
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
