//! Credential issuance and recovery.
//!
//! Generates a serial/PIN pair for a candidate whose fee payment has been
//! confirmed (callers gate on that), hashes the PIN before it is persisted,
//! and delivers the plaintext pair by SMS. A failed delivery on the initial
//! issue path reverts the persisted fields so a candidate never holds
//! credentials that were not communicated; the recovery path does not revert
//! since regenerating a PIN is cheap to repeat.

use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;

use crate::{
    data::candidate::CandidateRepository,
    error::{credential::CredentialError, Error},
    hubtel,
};

const BCRYPT_COST: u32 = 10;
const SERIAL_LENGTH: usize = 8;
const PIN_LENGTH: usize = 6;

/// A freshly issued credential pair. The pin here is the plaintext that was
/// sent by SMS; only its hash is persisted.
pub struct IssuedCredentials {
    pub serial_number: String,
    pub pin: String,
}

pub struct CredentialService<'a> {
    db: &'a DatabaseConnection,
    hubtel: &'a hubtel::Client,
}

impl<'a> CredentialService<'a> {
    pub fn new(db: &'a DatabaseConnection, hubtel: &'a hubtel::Client) -> Self {
        Self { db, hubtel }
    }

    /// Issues a serial/PIN pair for a candidate and delivers it by SMS.
    ///
    /// The PIN is bcrypt-hashed before it is persisted. When SMS delivery
    /// fails the just-written serial, pin, and phone number are reverted and
    /// `CredentialError::SmsDeliveryFailed` is returned.
    pub async fn issue(
        &self,
        index_number: &str,
        phone_number: &str,
    ) -> Result<IssuedCredentials, Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        if candidate_repo
            .find_by_index_number(index_number)
            .await?
            .is_none()
        {
            return Err(CredentialError::CandidateNotFound(index_number.to_string()).into());
        }

        let serial_number = generate_serial();
        let pin = generate_pin();
        let pin_hash = bcrypt::hash(&pin, BCRYPT_COST)?;

        candidate_repo
            .set_credentials(index_number, &serial_number, &pin_hash, phone_number)
            .await?;

        let message = format!(
            "Your admission login credentials. Serial Number: {} PIN: {}. Do not share them with anyone.",
            serial_number, pin
        );

        if let Err(e) = self.hubtel.send_sms(phone_number, &message).await {
            tracing::warn!(
                "SMS delivery failed for index number {}, reverting issued credentials: {}",
                index_number,
                e
            );

            candidate_repo.clear_credentials(index_number).await?;

            return Err(CredentialError::SmsDeliveryFailed(index_number.to_string()).into());
        }

        tracing::info!("Issued credentials for index number {}", index_number);

        Ok(IssuedCredentials { serial_number, pin })
    }

    /// Regenerates only the PIN for a candidate who already holds a serial
    /// number and sends it to the phone number on record.
    pub async fn recover(&self, index_number: &str) -> Result<(), Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        let candidate = candidate_repo
            .find_by_index_number(index_number)
            .await?
            .ok_or_else(|| CredentialError::CandidateNotFound(index_number.to_string()))?;

        let Some(serial_number) = candidate.serial_number else {
            return Err(CredentialError::NoSerialIssued(index_number.to_string()).into());
        };

        let Some(phone_number) = candidate.phone_number else {
            return Err(CredentialError::NoPhoneNumber(index_number.to_string()).into());
        };

        let pin = generate_pin();
        let pin_hash = bcrypt::hash(&pin, BCRYPT_COST)?;

        candidate_repo.set_pin(index_number, &pin_hash).await?;

        let message = format!(
            "Your new PIN is {}. Your Serial Number remains {}.",
            pin, serial_number
        );

        // No revert here: the replaced PIN is already unusable and a repeat
        // recovery issues a fresh one.
        if let Err(e) = self.hubtel.send_sms(&phone_number, &message).await {
            tracing::warn!(
                "SMS delivery failed for PIN recovery of index number {}: {}",
                index_number,
                e
            );

            return Err(CredentialError::SmsDeliveryFailed(index_number.to_string()).into());
        }

        tracing::info!("Recovered PIN for index number {}", index_number);

        Ok(())
    }
}

/// 8-character uppercase alphanumeric serial.
fn generate_serial() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SERIAL_LENGTH)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

/// 6-digit numeric PIN.
fn generate_pin() -> String {
    let mut rng = rand::rng();

    (0..PIN_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10)))
        .collect()
}
