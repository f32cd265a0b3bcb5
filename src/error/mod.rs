//! Error types for the matric admission server.
//!
//! Domain-specific error enums (allocation, credentials, payments, auth,
//! configuration) are aggregated into a single [`Error`] type. All errors
//! implement `IntoResponse` so axum handlers can return them directly, and
//! `retry.rs` classifies which failures are worth retrying with backoff.

pub mod allocation;
pub mod auth;
pub mod config;
pub mod credential;
pub mod payment;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        allocation::AllocationError, auth::AuthError, config::ConfigError,
        credential::CredentialError, payment::PaymentError,
    },
    model::api::ErrorDto,
};

/// Main error type for the admission server.
///
/// Aggregates all domain-specific error types and external library errors into
/// a single unified error. `#[from]` conversions let handlers and services use
/// the `?` operator throughout; the `IntoResponse` implementation maps each
/// variant to the appropriate HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session or credential validation error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// House placement error (no eligible houses, all houses full).
    #[error(transparent)]
    AllocationError(#[from] AllocationError),
    /// Credential issuance error (unknown candidate, SMS delivery failure).
    #[error(transparent)]
    CredentialError(#[from] CredentialError),
    /// Payment lifecycle error (unknown reference, unknown index number).
    #[error(transparent)]
    PaymentError(#[from] PaymentError),
    /// Unknown candidate index number.
    #[error("Candidate with index number {0:?} not found")]
    CandidateNotFound(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in matric's code.
    #[error("Internal error with matric's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Hubtel API error (checkout, transaction status, SMS delivery).
    #[error(transparent)]
    HubtelError(#[from] crate::hubtel::HubtelError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// PIN/password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::AllocationError(err) => err.into_response(),
            Self::CredentialError(err) => err.into_response(),
            Self::PaymentError(err) => err.into_response(),
            Self::CandidateNotFound(index_number) => {
                tracing::debug!("Candidate with index number {:?} not found", index_number);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Candidate not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error for diagnostics but returns a generic message to the
/// client so implementation detail never leaks into API responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "An error occurred".to_string(),
            }),
        )
            .into_response()
    }
}
