//! Tests for index verification and candidate login endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matric::{
    controller::auth::{candidate_login, candidate_logout, verify_index_number},
    data::candidate::CandidateRepository,
    error::{auth::AuthError, Error},
    model::{
        api::{CandidateLoginDto, VerifyRequestDto},
        app::AppState,
        session::candidate::SessionCandidate,
    },
};
use matric_test_utils::prelude::*;

/// Expect 200 with the candidate record for a known index number
#[tokio::test]
async fn verify_returns_candidate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;

    CandidateRepository::new(&test.state.db)
        .create(mock_create_candidate("12345678"))
        .await?;

    let result = verify_index_number(
        State(test.state::<AppState>()),
        Json(VerifyRequestDto {
            index_number: "12345678".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect CandidateNotFound for an unknown index number
#[tokio::test]
async fn verify_fails_for_unknown_index_number() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;

    let result = verify_index_number(
        State(test.state::<AppState>()),
        Json(VerifyRequestDto {
            index_number: "99999999".to_string(),
        }),
    )
    .await;

    assert!(matches!(result, Err(Error::CandidateNotFound(_))));

    Ok(())
}

/// Expect login with a valid serial number and PIN to establish a session
#[tokio::test]
async fn login_succeeds_with_valid_credentials() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::CandidateLog)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let pin_hash = bcrypt::hash("123456", 4).unwrap();
    candidate_repo
        .set_credentials("12345678", "SERIAL01", &pin_hash, "0241234567")
        .await?;

    let result = candidate_login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(CandidateLoginDto {
            serial_number: "SERIAL01".to_string(),
            pin: "123456".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let in_session = SessionCandidate::get(&test.session).await?;
    assert_eq!(in_session.as_deref(), Some("12345678"));

    Ok(())
}

/// Expect login with a wrong PIN to be rejected
#[tokio::test]
async fn login_fails_with_wrong_pin() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::CandidateLog)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let pin_hash = bcrypt::hash("123456", 4).unwrap();
    candidate_repo
        .set_credentials("12345678", "SERIAL01", &pin_hash, "0241234567")
        .await?;

    let result = candidate_login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(CandidateLoginDto {
            serial_number: "SERIAL01".to_string(),
            pin: "000000".to_string(),
        }),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect login with an unknown serial number to be rejected
#[tokio::test]
async fn login_fails_with_unknown_serial() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::CandidateLog)?;

    let result = candidate_login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(CandidateLoginDto {
            serial_number: "UNKNOWN1".to_string(),
            pin: "123456".to_string(),
        }),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect logout to clear the candidate session
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test =
        test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::CandidateLog)?;

    CandidateRepository::new(&test.state.db)
        .create(mock_create_candidate("12345678"))
        .await?;
    SessionCandidate::insert(&test.session, "12345678").await?;

    let result = candidate_logout(State(test.state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let in_session = SessionCandidate::get(&test.session).await?;
    assert!(in_session.is_none());

    Ok(())
}
