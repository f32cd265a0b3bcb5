use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Admin ID is not present in session")]
    AdminNotInSession,
    #[error("Admin ID {0} not found in database despite having an active session")]
    AdminNotInDatabase(i32),
    #[error("Invalid serial number or PIN")]
    InvalidCredentials,
    #[error("Invalid username or password")]
    InvalidAdminCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AdminNotInSession | Self::AdminNotInDatabase(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid serial number or PIN".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidAdminCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
