//! Tests for AllocationService house placement and reassignment.

use matric::{
    data::{candidate::CandidateRepository, house::HouseRepository},
    error::{allocation::AllocationError, Error},
    service::allocation::AllocationService,
};
use matric_test_utils::prelude::*;

/// Expect a candidate to be placed in a gender-matching house and the
/// occupancy to grow by exactly one
#[tokio::test]
async fn allocate_places_candidate_and_increments_occupancy() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let house_repo = HouseRepository::new(&test.state.db);
    let candidate_repo = CandidateRepository::new(&test.state.db);

    let house = house_repo.create("Aggrey House", "Female", 10).await?;
    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let allocated = AllocationService::new(&test.state.db)
        .allocate("Female", "12345678")
        .await?;

    assert_eq!(allocated.house_id, house.id);
    assert_eq!(allocated.house_name, "Aggrey House");

    let house = house_repo.get_by_id(house.id).await?.unwrap();
    assert_eq!(house.current_occupancy, 1);

    let candidate = candidate_repo.find_by_index_number("12345678").await?.unwrap();
    assert_eq!(candidate.house_id, Some(house.id));
    assert_eq!(candidate.house_name.as_deref(), Some("Aggrey House"));

    Ok(())
}

/// Expect a second allocation to pick the house that matches the occupancy,
/// raising it from 1 to 2
#[tokio::test]
async fn allocate_second_candidate_same_house() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let house_repo = HouseRepository::new(&test.state.db);
    let candidate_repo = CandidateRepository::new(&test.state.db);

    let house = house_repo.create("Aggrey House", "Female", 10).await?;
    candidate_repo.create(mock_create_candidate("11111111")).await?;
    candidate_repo.create(mock_create_candidate("22222222")).await?;

    let service = AllocationService::new(&test.state.db);
    service.allocate("Female", "11111111").await?;
    service.allocate("Female", "22222222").await?;

    let house = house_repo.get_by_id(house.id).await?.unwrap();
    assert_eq!(house.current_occupancy, 2);

    Ok(())
}

/// Expect AllHousesFull once every matching house is at capacity
#[tokio::test]
async fn allocate_fails_when_all_houses_full() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let house_repo = HouseRepository::new(&test.state.db);
    let candidate_repo = CandidateRepository::new(&test.state.db);

    let house_1 = house_repo.create("House 1", "Female", 1).await?;
    let house_2 = house_repo.create("House 2", "Female", 1).await?;

    for index in ["11111111", "22222222", "33333333"] {
        candidate_repo.create(mock_create_candidate(index)).await?;
    }

    let service = AllocationService::new(&test.state.db);
    service.allocate("Female", "11111111").await?;
    service.allocate("Female", "22222222").await?;

    let result = service.allocate("Female", "33333333").await;

    assert!(matches!(
        result,
        Err(Error::AllocationError(AllocationError::AllHousesFull(_)))
    ));

    let house_1 = house_repo.get_by_id(house_1.id).await?.unwrap();
    let house_2 = house_repo.get_by_id(house_2.id).await?.unwrap();
    assert_eq!(house_1.current_occupancy, 1);
    assert_eq!(house_2.current_occupancy, 1);

    Ok(())
}

/// Expect NoHousesFound when no house of the gender exists
#[tokio::test]
async fn allocate_fails_when_no_house_of_gender() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let candidate_repo = CandidateRepository::new(&test.state.db);

    HouseRepository::new(&test.state.db)
        .create("House 1", "Male", 10)
        .await?;
    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let result = AllocationService::new(&test.state.db)
        .allocate("Female", "12345678")
        .await;

    assert!(matches!(
        result,
        Err(Error::AllocationError(AllocationError::NoHousesFound(_)))
    ));

    Ok(())
}

/// Expect the claimed seat to be released again when the index number turns
/// out to be unknown
#[tokio::test]
async fn allocate_releases_seat_for_unknown_candidate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let house_repo = HouseRepository::new(&test.state.db);

    let house = house_repo.create("House 1", "Female", 10).await?;

    let result = AllocationService::new(&test.state.db)
        .allocate("Female", "99999999")
        .await;

    assert!(matches!(
        result,
        Err(Error::AllocationError(AllocationError::CandidateNotFound(_)))
    ));

    let house = house_repo.get_by_id(house.id).await?.unwrap();
    assert_eq!(house.current_occupancy, 0);

    Ok(())
}

/// Expect reassignment to move the candidate, incrementing the new house and
/// decrementing the old one
#[tokio::test]
async fn reassign_moves_candidate_between_houses() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let house_repo = HouseRepository::new(&test.state.db);
    let candidate_repo = CandidateRepository::new(&test.state.db);

    let old_house = house_repo.create("House 1", "Female", 10).await?;
    let new_house = house_repo.create("House 2", "Female", 10).await?;
    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let service = AllocationService::new(&test.state.db);
    service.allocate("Female", "12345678").await?;

    let moved = service.reassign("12345678", new_house.id).await?;

    assert_eq!(moved.house_id, new_house.id);

    let old_house = house_repo.get_by_id(old_house.id).await?.unwrap();
    let new_house = house_repo.get_by_id(new_house.id).await?.unwrap();
    assert_eq!(old_house.current_occupancy, 0);
    assert_eq!(new_house.current_occupancy, 1);

    Ok(())
}

/// Expect reassignment to a full house to be rejected without touching
/// either house's occupancy
#[tokio::test]
async fn reassign_rejects_full_house_without_releasing_old_seat() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let house_repo = HouseRepository::new(&test.state.db);
    let candidate_repo = CandidateRepository::new(&test.state.db);

    let old_house = house_repo.create("House 1", "Female", 10).await?;
    let full_house = house_repo.create("House 2", "Female", 1).await?;
    candidate_repo.create(mock_create_candidate("11111111")).await?;
    candidate_repo.create(mock_create_candidate("22222222")).await?;

    let service = AllocationService::new(&test.state.db);
    service.allocate("Female", "11111111").await?;
    service.reassign("22222222", full_house.id).await?;

    let result = service.reassign("11111111", full_house.id).await;

    assert!(matches!(
        result,
        Err(Error::AllocationError(AllocationError::HouseFull(_)))
    ));

    let old_house = house_repo.get_by_id(old_house.id).await?.unwrap();
    let full_house = house_repo.get_by_id(full_house.id).await?.unwrap();
    assert_eq!(old_house.current_occupancy, 1);
    assert_eq!(full_house.current_occupancy, 1);

    Ok(())
}

/// Expect reassignment to the current house to be a no-op
#[tokio::test]
async fn reassign_to_same_house_is_noop() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Candidate, entity::prelude::House)?;
    let house_repo = HouseRepository::new(&test.state.db);
    let candidate_repo = CandidateRepository::new(&test.state.db);

    let house = house_repo.create("House 1", "Female", 10).await?;
    candidate_repo.create(mock_create_candidate("12345678")).await?;

    let service = AllocationService::new(&test.state.db);
    service.allocate("Female", "12345678").await?;

    let moved = service.reassign("12345678", house.id).await?;

    assert_eq!(moved.house_id, house.id);

    let house = house_repo.get_by_id(house.id).await?.unwrap();
    assert_eq!(house.current_occupancy, 1);

    Ok(())
}
