//! Payment lifecycle tracking.
//!
//! A payment attempt is keyed by a unique client reference and moves from
//! `pending` to `completed` or `failed`; terminal states never transition
//! backward. A `completed` check also marks the owning candidate's fee as
//! paid, which is what unlocks credential issuance downstream.

use chrono::Utc;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::{candidate::CandidateRepository, payment::PaymentRepository},
    error::{payment::PaymentError, Error},
    hubtel::{self, model::TransactionStatus},
    model::rate_limit::StatusCheckLimiter,
};

/// Prefix for generated client references.
pub const CLIENT_REFERENCE_PREFIX: &str = "PEKI";

/// Local view of a payment's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Outcome of a checkout initiation.
pub struct InitiatedPayment {
    pub checkout_url: String,
    pub client_reference: String,
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    hubtel: &'a hubtel::Client,
    status_checks: &'a StatusCheckLimiter,
}

impl<'a> PaymentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        hubtel: &'a hubtel::Client,
        status_checks: &'a StatusCheckLimiter,
    ) -> Self {
        Self {
            db,
            hubtel,
            status_checks,
        }
    }

    /// Starts a payment attempt: generates a client reference, obtains a
    /// checkout URL from the provider, and records the payment as pending.
    pub async fn initiate(
        &self,
        index_number: &str,
        amount: f64,
    ) -> Result<InitiatedPayment, Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        if candidate_repo
            .find_by_index_number(index_number)
            .await?
            .is_none()
        {
            return Err(PaymentError::UnknownIndexNumber(index_number.to_string()).into());
        }

        let client_reference = generate_client_reference();

        let checkout = self
            .hubtel
            .initiate_checkout(
                amount,
                &format!("Application fee for index number {}", index_number),
                &client_reference,
            )
            .await?;

        PaymentRepository::new(self.db)
            .create(
                &client_reference,
                index_number,
                amount,
                Some(&checkout.checkout_id),
            )
            .await?;

        tracing::info!(
            "Initiated payment {} for index number {}",
            client_reference,
            index_number
        );

        Ok(InitiatedPayment {
            checkout_url: checkout.checkout_url,
            client_reference,
        })
    }

    /// Resolves the current status of a payment attempt.
    ///
    /// Terminal local states are answered without a provider call, which
    /// makes repeated checks after completion idempotent. Pending payments
    /// query the provider at most once per reference per 30 seconds; a
    /// throttled poll answers with the local state instead of erroring.
    /// A provider `Success` also sets the candidate's `fee_paid` flag.
    pub async fn check_status(&self, client_reference: &str) -> Result<PaymentStatus, Error> {
        let payment_repo = PaymentRepository::new(self.db);

        let Some(payment) = payment_repo.find_by_client_reference(client_reference).await? else {
            return Err(PaymentError::PaymentNotFound(client_reference.to_string()).into());
        };

        match payment.status.as_str() {
            "completed" => return Ok(PaymentStatus::Completed),
            "failed" => return Ok(PaymentStatus::Failed),
            _ => {}
        }

        if !self.status_checks.try_acquire(client_reference) {
            tracing::debug!("Status check for {} throttled", client_reference);

            return Ok(PaymentStatus::Pending);
        }

        match self.hubtel.transaction_status(client_reference).await? {
            TransactionStatus::Success => {
                payment_repo
                    .set_status(client_reference, PaymentStatus::Completed.as_str())
                    .await?;

                CandidateRepository::new(self.db)
                    .set_fee_paid(&payment.index_number)
                    .await?;

                tracing::info!(
                    "Payment {} completed for index number {}",
                    client_reference,
                    payment.index_number
                );

                Ok(PaymentStatus::Completed)
            }
            TransactionStatus::Failed => {
                payment_repo
                    .set_status(client_reference, PaymentStatus::Failed.as_str())
                    .await?;

                Ok(PaymentStatus::Failed)
            }
            TransactionStatus::Other(status) => {
                tracing::debug!(
                    "Payment {} still pending at provider (status {:?})",
                    client_reference,
                    status
                );

                Ok(PaymentStatus::Pending)
            }
        }
    }
}

/// Client reference unique per attempt: `PEKI-<unix millis>-<4-digit random>`.
fn generate_client_reference() -> String {
    format!(
        "{}-{}-{:04}",
        CLIENT_REFERENCE_PREFIX,
        Utc::now().timestamp_millis(),
        rand::rng().random_range(0..10_000)
    )
}
