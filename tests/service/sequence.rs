//! Tests for ApplicationNumberService daily sequencing.

use chrono::NaiveDate;
use matric::{
    data::candidate::CandidateRepository,
    error::{retry::ErrorRetryStrategy, Error},
    service::sequence::ApplicationNumberService,
};
use matric_test_utils::prelude::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Expect the first number of a day to be position 1 with a 0001 suffix
#[tokio::test]
async fn first_number_of_day_starts_at_one() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;

    let generated = ApplicationNumberService::new(&test.state.db)
        .next_for_date(date(2026, 8, 26))
        .await?;

    assert_eq!(generated.application_number, "260826-0001");
    assert_eq!(generated.position, 1);

    Ok(())
}

/// Expect the next number to follow the highest existing suffix for the day
#[tokio::test]
async fn next_number_follows_highest_suffix() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("11111111")).await?;
    candidate_repo.create(mock_create_candidate("22222222")).await?;
    candidate_repo
        .set_application_number("11111111", "260826-0001")
        .await?;
    candidate_repo
        .set_application_number("22222222", "260826-0007")
        .await?;

    let generated = ApplicationNumberService::new(&test.state.db)
        .next_for_date(date(2026, 8, 26))
        .await?;

    assert_eq!(generated.application_number, "260826-0008");
    assert_eq!(generated.position, 8);

    Ok(())
}

/// Expect the sequence to reset across days: numbers from another date do not
/// bleed into a new day's prefix
#[tokio::test]
async fn sequence_is_scoped_per_day() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("11111111")).await?;
    candidate_repo
        .set_application_number("11111111", "250826-0042")
        .await?;

    let generated = ApplicationNumberService::new(&test.state.db)
        .next_for_date(date(2026, 8, 26))
        .await?;

    assert_eq!(generated.application_number, "260826-0001");
    assert_eq!(generated.position, 1);

    Ok(())
}

/// Expect the sequence to keep counting past 9999 within one day, with the
/// suffix widening to 5 digits
#[tokio::test]
async fn sequence_continues_past_four_digit_suffix() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("11111111")).await?;
    candidate_repo.create(mock_create_candidate("22222222")).await?;
    candidate_repo
        .set_application_number("11111111", "260826-9999")
        .await?;
    candidate_repo
        .set_application_number("22222222", "260826-10000")
        .await?;

    let generated = ApplicationNumberService::new(&test.state.db)
        .next_for_date(date(2026, 8, 26))
        .await?;

    assert_eq!(generated.application_number, "260826-10001");
    assert_eq!(generated.position, 10001);

    Ok(())
}

/// Expect a duplicate application number collision to be classified as a
/// retryable lost race rather than a permanent failure
#[tokio::test]
async fn duplicate_number_collision_is_retryable() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("11111111")).await?;
    candidate_repo.create(mock_create_candidate("22222222")).await?;
    candidate_repo
        .set_application_number("11111111", "260826-0001")
        .await?;

    let err = candidate_repo
        .set_application_number("22222222", "260826-0001")
        .await
        .unwrap_err();

    assert!(matches!(
        Error::from(err).to_retry_strategy(),
        ErrorRetryStrategy::Retry
    ));

    Ok(())
}

/// Expect finalize to stamp today's number onto the candidate record
#[tokio::test]
async fn finalize_stamps_number_on_candidate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let generated = ApplicationNumberService::new(&test.state.db)
        .finalize("12345678")
        .await?;

    assert_eq!(generated.position, 1);

    let candidate = candidate_repo.find_by_index_number("12345678").await?.unwrap();
    assert_eq!(
        candidate.application_number.as_deref(),
        Some(generated.application_number.as_str())
    );

    Ok(())
}

/// Expect finalize to fail for an unknown index number
#[tokio::test]
async fn finalize_fails_for_unknown_candidate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate)?;

    let result = ApplicationNumberService::new(&test.state.db)
        .finalize("99999999")
        .await;

    assert!(matches!(result, Err(Error::CandidateNotFound(_))));

    Ok(())
}
