//! Tests for CredentialService issuance and PIN recovery.

use matric::{
    data::candidate::CandidateRepository,
    error::{credential::CredentialError, Error},
    service::credential::CredentialService,
};
use matric_test_utils::prelude::*;

/// Expect issuance to persist a hashed PIN that verifies against the
/// plaintext sent by SMS
#[tokio::test]
async fn issue_stores_hashed_pin() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let sms_mock = mock_sms_endpoint(&mut test.server, 1);

    let issued = CredentialService::new(&test.state.db, &test.state.hubtel)
        .issue("12345678", "0241234567")
        .await?;

    let candidate = candidate_repo.find_by_index_number("12345678").await?.unwrap();
    let stored_pin = candidate.pin.unwrap();

    assert_eq!(candidate.serial_number.as_deref(), Some(issued.serial_number.as_str()));
    assert_eq!(candidate.phone_number.as_deref(), Some("0241234567"));
    assert_ne!(stored_pin, issued.pin);
    assert!(bcrypt::verify(&issued.pin, &stored_pin).unwrap());

    sms_mock.assert();

    Ok(())
}

/// Expect a failed SMS delivery to revert the just-issued credentials
#[tokio::test]
async fn issue_reverts_credentials_when_sms_fails() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let sms_mock = mock_sms_rejected_endpoint(&mut test.server, 1);

    let result = CredentialService::new(&test.state.db, &test.state.hubtel)
        .issue("12345678", "0241234567")
        .await;

    assert!(matches!(
        result,
        Err(Error::CredentialError(CredentialError::SmsDeliveryFailed(_)))
    ));

    let candidate = candidate_repo.find_by_index_number("12345678").await?.unwrap();
    assert!(candidate.serial_number.is_none());
    assert!(candidate.pin.is_none());
    assert!(candidate.phone_number.is_none());

    sms_mock.assert();

    Ok(())
}

/// Expect CandidateNotFound when issuing for an unknown index number
#[tokio::test]
async fn issue_fails_for_unknown_candidate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;

    let result = CredentialService::new(&test.state.db, &test.state.hubtel)
        .issue("99999999", "0241234567")
        .await;

    assert!(matches!(
        result,
        Err(Error::CredentialError(CredentialError::CandidateNotFound(_)))
    ));

    Ok(())
}

/// Expect recovery to replace the PIN while keeping the serial number
#[tokio::test]
async fn recover_replaces_pin_and_keeps_serial() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let sms_mock = mock_sms_endpoint(&mut test.server, 2);

    let service = CredentialService::new(&test.state.db, &test.state.hubtel);
    let issued = service.issue("12345678", "0241234567").await?;

    let before = candidate_repo.find_by_index_number("12345678").await?.unwrap();

    service.recover("12345678").await?;

    let after = candidate_repo.find_by_index_number("12345678").await?.unwrap();

    assert_eq!(after.serial_number.as_deref(), Some(issued.serial_number.as_str()));
    assert_ne!(after.pin, before.pin);

    sms_mock.assert();

    Ok(())
}

/// Expect NoSerialIssued when recovering for a candidate with no credentials
#[tokio::test]
async fn recover_fails_without_issued_serial() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;

    CandidateRepository::new(&test.state.db)
        .create(mock_create_candidate("12345678"))
        .await?;

    let result = CredentialService::new(&test.state.db, &test.state.hubtel)
        .recover("12345678")
        .await;

    assert!(matches!(
        result,
        Err(Error::CredentialError(CredentialError::NoSerialIssued(_)))
    ));

    Ok(())
}
