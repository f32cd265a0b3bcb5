use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AllocationError {
    #[error("No houses found for gender {0:?}")]
    NoHousesFound(String),
    #[error("All houses of gender {0:?} are at full capacity")]
    AllHousesFull(String),
    #[error("House ID {0} not found")]
    HouseNotFound(i32),
    #[error("House {0:?} is at full capacity")]
    HouseFull(String),
    #[error("Candidate with index number {0:?} not found during house placement")]
    CandidateNotFound(String),
    #[error("Candidate with index number {0:?} has no gender on record")]
    GenderMissing(String),
}

impl IntoResponse for AllocationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NoHousesFound(gender) => (
                StatusCode::NOT_FOUND,
                format!("No {} houses found", gender),
            ),
            Self::AllHousesFull(_) => (
                StatusCode::BAD_REQUEST,
                "All houses are at full capacity".to_string(),
            ),
            Self::HouseNotFound(_) => (StatusCode::NOT_FOUND, "House not found".to_string()),
            Self::HouseFull(name) => (
                StatusCode::BAD_REQUEST,
                format!("{} is at full capacity", name),
            ),
            Self::CandidateNotFound(_) => {
                (StatusCode::NOT_FOUND, "Candidate not found".to_string())
            }
            Self::GenderMissing(_) => (
                StatusCode::BAD_REQUEST,
                "Candidate has no gender on record".to_string(),
            ),
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
