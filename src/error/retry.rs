use sea_orm::{DbErr, SqlErr};

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures, lost races)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Hubtel request errors - provider outages and network issues are
            // transient, rejected requests are not
            Error::HubtelError(crate::hubtel::HubtelError::ReqwestError(reqwest_error)) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        // Provider is temporarily unavailable, backoff and retry
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,

                        // We're making invalid requests to the provider, this is
                        // a flaw in the code that needs to be fixed
                        s if s.is_client_error() => ErrorRetryStrategy::Fail,

                        _ => ErrorRetryStrategy::Fail,
                    }
                } else {
                    // Network error or connection issue - should retry
                    ErrorRetryStrategy::Retry
                }
            }

            Self::DbErr(db_err) => {
                // A unique-index collision on save means two requests computed
                // the same application number; regenerating and saving again
                // resolves it, so it is retryable rather than fatal.
                if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return ErrorRetryStrategy::Retry;
                }

                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // query errors, type conversion errors, schema errors,
                    // record not found/inserted/updated. These indicate
                    // programming bugs or data issues that won't resolve
                    // with retry.
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Session errors - transient, could be store issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,

            // Other Hubtel errors - malformed responses, rejected SMS
            Self::HubtelError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Auth errors - permanent failures (bad requests, missing data)
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Domain errors - permanent failures surfaced to the caller
            Self::AllocationError(_) => ErrorRetryStrategy::Fail,
            Self::CredentialError(_) => ErrorRetryStrategy::Fail,
            Self::PaymentError(_) => ErrorRetryStrategy::Fail,

            // Unknown candidate - permanent failure
            Self::CandidateNotFound(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within matric's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,

            // Hashing errors - permanent failures
            Self::BcryptError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
