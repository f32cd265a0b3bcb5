//! Retry logic with exponential backoff for service operations.
//!
//! [`RetryContext`] executes an operation with automatic retry and backoff,
//! consulting the error system to decide which failures are retryable. The
//! application number sequence relies on this: a unique-index collision on
//! save is a lost race, and regenerating under a fresh read resolves it.

use std::time::Duration;

use crate::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// Provides exponential backoff retry behavior with configurable max attempts
/// and initial backoff duration. The generic state type `T` persists between
/// retry attempts so an operation can avoid repeating work it already did.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
pub struct RetryContext<T> {
    /// State carried between retries
    state: T,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in seconds (doubles with each retry)
    initial_backoff_secs: u64,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

    /// Creates a new retry context with 3 max attempts and 1 second initial
    /// backoff. The carried state is initialized with its `Default`.
    pub fn new() -> Self {
        Self {
            state: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_secs: Self::DEFAULT_INITIAL_BACKOFF_SECS,
        }
    }

    /// Executes an operation with automatic retry logic and exponential
    /// backoff.
    ///
    /// Runs the provided async operation up to `max_attempts` times, retrying
    /// on transient failures. Errors are evaluated with `to_retry_strategy()`
    /// to determine whether they are retryable or permanent.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging
    /// - `operation` - Async function that receives the mutable carried state
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            let result = operation(&mut self.state).await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_secs = self.initial_backoff_secs * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_secs(backoff_secs);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl<T> Default for RetryContext<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}
