//! Tests for PaymentService checkout initiation and status resolution.

use matric::{
    data::{candidate::CandidateRepository, payment::PaymentRepository},
    error::{payment::PaymentError, Error},
    model::rate_limit::StatusCheckLimiter,
    service::payment::{PaymentService, PaymentStatus},
};
use matric_test_utils::prelude::*;

/// Expect initiation to record a pending payment and hand back the provider's
/// checkout URL
#[tokio::test]
async fn initiate_records_pending_payment() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::Payment)?;
    let limiter = StatusCheckLimiter::default();

    CandidateRepository::new(&test.state.db)
        .create(mock_create_candidate("12345678"))
        .await?;

    let checkout_mock = mock_checkout_endpoint(&mut test.server, "checkout-1", 1);

    let payment = PaymentService::new(&test.state.db, &test.state.hubtel, &limiter)
        .initiate("12345678", 150.0)
        .await?;

    assert!(payment.checkout_url.contains("checkout-1"));

    let stored = PaymentRepository::new(&test.state.db)
        .find_by_client_reference(&payment.client_reference)
        .await?
        .unwrap();

    assert_eq!(stored.status, "pending");
    assert_eq!(stored.index_number, "12345678");

    checkout_mock.assert();

    Ok(())
}

/// Expect initiation for an unknown index number to fail before any provider
/// call is made
#[tokio::test]
async fn initiate_fails_for_unknown_index_number() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::Payment)?;
    let limiter = StatusCheckLimiter::default();

    let checkout_mock = mock_checkout_endpoint(&mut test.server, "checkout-1", 0);

    let result = PaymentService::new(&test.state.db, &test.state.hubtel, &limiter)
        .initiate("99999999", 150.0)
        .await;

    assert!(matches!(
        result,
        Err(Error::PaymentError(PaymentError::UnknownIndexNumber(_)))
    ));

    checkout_mock.assert();

    Ok(())
}

/// Expect a provider Success to complete the payment and mark the candidate's
/// fee as paid
#[tokio::test]
async fn check_status_success_marks_fee_paid() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::Payment)?;
    let limiter = StatusCheckLimiter::default();
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;
    PaymentRepository::new(&test.state.db)
        .create("PEKI-1000", "12345678", 150.0, Some("checkout-1"))
        .await?;

    let status_mock = mock_status_endpoint(&mut test.server, "PEKI-1000", "Success", 1);

    let status = PaymentService::new(&test.state.db, &test.state.hubtel, &limiter)
        .check_status("PEKI-1000")
        .await?;

    assert_eq!(status, PaymentStatus::Completed);

    let candidate = candidate_repo.find_by_index_number("12345678").await?.unwrap();
    assert!(candidate.fee_paid);

    status_mock.assert();

    Ok(())
}

/// Expect a provider Failed to mark the payment failed and leave the fee flag
/// untouched
#[tokio::test]
async fn check_status_failed_leaves_fee_unpaid() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::Payment)?;
    let limiter = StatusCheckLimiter::default();
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;
    PaymentRepository::new(&test.state.db)
        .create("PEKI-1000", "12345678", 150.0, Some("checkout-1"))
        .await?;

    let status_mock = mock_status_endpoint(&mut test.server, "PEKI-1000", "Failed", 1);

    let status = PaymentService::new(&test.state.db, &test.state.hubtel, &limiter)
        .check_status("PEKI-1000")
        .await?;

    assert_eq!(status, PaymentStatus::Failed);

    let payment = PaymentRepository::new(&test.state.db)
        .find_by_client_reference("PEKI-1000")
        .await?
        .unwrap();
    assert_eq!(payment.status, "failed");

    let candidate = candidate_repo.find_by_index_number("12345678").await?.unwrap();
    assert!(!candidate.fee_paid);

    status_mock.assert();

    Ok(())
}

/// Expect a second check after completion to answer locally without another
/// provider call
#[tokio::test]
async fn check_status_completed_is_idempotent() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::Payment)?;
    let limiter = StatusCheckLimiter::default();

    CandidateRepository::new(&test.state.db)
        .create(mock_create_candidate("12345678"))
        .await?;
    PaymentRepository::new(&test.state.db)
        .create("PEKI-1000", "12345678", 150.0, Some("checkout-1"))
        .await?;

    let status_mock = mock_status_endpoint(&mut test.server, "PEKI-1000", "Success", 1);

    let service = PaymentService::new(&test.state.db, &test.state.hubtel, &limiter);

    let first = service.check_status("PEKI-1000").await?;
    let second = service.check_status("PEKI-1000").await?;

    assert_eq!(first, PaymentStatus::Completed);
    assert_eq!(second, PaymentStatus::Completed);

    status_mock.assert();

    Ok(())
}

/// Expect a throttled pending poll to answer Pending without reaching the
/// provider a second time
#[tokio::test]
async fn check_status_pending_poll_is_throttled() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::Payment)?;
    let limiter = StatusCheckLimiter::default();

    CandidateRepository::new(&test.state.db)
        .create(mock_create_candidate("12345678"))
        .await?;
    PaymentRepository::new(&test.state.db)
        .create("PEKI-1000", "12345678", 150.0, Some("checkout-1"))
        .await?;

    let status_mock = mock_status_endpoint(&mut test.server, "PEKI-1000", "Unpaid", 1);

    let service = PaymentService::new(&test.state.db, &test.state.hubtel, &limiter);

    let first = service.check_status("PEKI-1000").await?;
    let second = service.check_status("PEKI-1000").await?;

    assert_eq!(first, PaymentStatus::Pending);
    assert_eq!(second, PaymentStatus::Pending);

    status_mock.assert();

    Ok(())
}

/// Expect PaymentNotFound for an unknown client reference
#[tokio::test]
async fn check_status_fails_for_unknown_reference() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::Payment)?;
    let limiter = StatusCheckLimiter::default();

    let result = PaymentService::new(&test.state.db, &test.state.hubtel, &limiter)
        .check_status("PEKI-9999")
        .await;

    assert!(matches!(
        result,
        Err(Error::PaymentError(PaymentError::PaymentNotFound(_)))
    ));

    Ok(())
}
