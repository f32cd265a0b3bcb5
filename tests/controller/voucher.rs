//! Tests for credential issuance gating at the voucher endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matric::{
    controller::voucher::issue_voucher,
    data::candidate::CandidateRepository,
    error::{credential::CredentialError, Error},
    model::{api::VoucherRequestDto, app::AppState},
};
use matric_test_utils::prelude::*;

/// Expect issuance to be rejected while the application fee is unpaid
#[tokio::test]
async fn voucher_rejected_before_fee_payment() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate)?;

    CandidateRepository::new(&test.state.db)
        .create(mock_create_candidate("12345678"))
        .await?;

    let sms_mock = mock_sms_endpoint(&mut test.server, 0);

    let result = issue_voucher(
        State(test.state::<AppState>()),
        Json(VoucherRequestDto {
            index_number: "12345678".to_string(),
            phone_number: "0241234567".to_string(),
        }),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::CredentialError(CredentialError::FeeNotPaid(_)))
    ));

    sms_mock.assert();

    Ok(())
}

/// Expect issuance to succeed once the fee is marked paid
#[tokio::test]
async fn voucher_issued_after_fee_payment() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;
    candidate_repo.set_fee_paid("12345678").await?;

    let sms_mock = mock_sms_endpoint(&mut test.server, 1);

    let result = issue_voucher(
        State(test.state::<AppState>()),
        Json(VoucherRequestDto {
            index_number: "12345678".to_string(),
            phone_number: "0241234567".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let candidate = candidate_repo.find_by_index_number("12345678").await?.unwrap();
    assert!(candidate.serial_number.is_some());
    assert!(candidate.pin.is_some());

    sms_mock.assert();

    Ok(())
}

/// Expect CandidateNotFound for an unknown index number
#[tokio::test]
async fn voucher_fails_for_unknown_candidate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;

    let result = issue_voucher(
        State(test.state::<AppState>()),
        Json(VoucherRequestDto {
            index_number: "99999999".to_string(),
            phone_number: "0241234567".to_string(),
        }),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::CredentialError(CredentialError::CandidateNotFound(_)))
    ));

    Ok(())
}
