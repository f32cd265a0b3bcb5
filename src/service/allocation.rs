//! House placement.
//!
//! Binds a candidate to a house with spare capacity matching their gender.
//! The seat claim is a single conditional update (`occupancy < capacity` and
//! the increment in one statement), so concurrent callers cannot both take
//! the last seat; when the later candidate link fails the claimed seat is
//! released again.

use sea_orm::DatabaseConnection;

use crate::{
    data::{candidate::CandidateRepository, house::HouseRepository},
    error::{allocation::AllocationError, Error},
};

/// Outcome of a successful placement.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocatedHouse {
    pub house_id: i32,
    pub house_name: String,
}

pub struct AllocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a candidate into the first gender-matching house with a free
    /// seat, in natural query order.
    ///
    /// # Returns
    /// - `Ok(AllocatedHouse)` - Candidate linked and occupancy incremented by one
    /// - `Err(AllocationError::NoHousesFound)` - No house of the gender exists
    /// - `Err(AllocationError::AllHousesFull)` - Every matching house is at capacity
    /// - `Err(AllocationError::CandidateNotFound)` - Index number unknown (seat released)
    pub async fn allocate(
        &self,
        gender: &str,
        index_number: &str,
    ) -> Result<AllocatedHouse, Error> {
        let house_repo = HouseRepository::new(self.db);
        let candidate_repo = CandidateRepository::new(self.db);

        let houses = house_repo.find_by_gender(gender).await?;

        if houses.is_empty() {
            return Err(AllocationError::NoHousesFound(gender.to_string()).into());
        }

        for house in houses {
            if !house_repo.reserve_seat(house.id).await? {
                continue;
            }

            // Seat is held; link the candidate or give the seat back.
            match candidate_repo
                .set_house(index_number, house.id, &house.name, gender)
                .await
            {
                Ok(Some(_)) => {
                    tracing::info!(
                        "Assigned candidate {} to house {}",
                        index_number,
                        house.name
                    );

                    return Ok(AllocatedHouse {
                        house_id: house.id,
                        house_name: house.name,
                    });
                }
                Ok(None) => {
                    house_repo.release_seat(house.id).await?;

                    return Err(
                        AllocationError::CandidateNotFound(index_number.to_string()).into(),
                    );
                }
                Err(e) => {
                    house_repo.release_seat(house.id).await?;

                    return Err(e.into());
                }
            }
        }

        Err(AllocationError::AllHousesFull(gender.to_string()).into())
    }

    /// Moves a candidate to a specific house, used by admin edits.
    ///
    /// The new seat is claimed first and the old one released only after the
    /// candidate record points at the new house, so a failure part-way leaves
    /// no house under-counted.
    pub async fn reassign(
        &self,
        index_number: &str,
        new_house_id: i32,
    ) -> Result<AllocatedHouse, Error> {
        let house_repo = HouseRepository::new(self.db);
        let candidate_repo = CandidateRepository::new(self.db);

        let candidate = candidate_repo
            .find_by_index_number(index_number)
            .await?
            .ok_or_else(|| AllocationError::CandidateNotFound(index_number.to_string()))?;

        let new_house = house_repo
            .get_by_id(new_house_id)
            .await?
            .ok_or(AllocationError::HouseNotFound(new_house_id))?;

        // Already there; nothing to move.
        if candidate.house_id == Some(new_house.id) {
            return Ok(AllocatedHouse {
                house_id: new_house.id,
                house_name: new_house.name,
            });
        }

        if !house_repo.reserve_seat(new_house.id).await? {
            return Err(AllocationError::HouseFull(new_house.name).into());
        }

        let old_house_id = candidate.house_id;

        match candidate_repo
            .set_house(index_number, new_house.id, &new_house.name, &new_house.gender)
            .await
        {
            Ok(Some(_)) => {
                if let Some(old_house_id) = old_house_id {
                    house_repo.release_seat(old_house_id).await?;
                }

                tracing::info!(
                    "Moved candidate {} to house {}",
                    index_number,
                    new_house.name
                );

                Ok(AllocatedHouse {
                    house_id: new_house.id,
                    house_name: new_house.name,
                })
            }
            Ok(None) => {
                house_repo.release_seat(new_house.id).await?;

                Err(AllocationError::CandidateNotFound(index_number.to_string()).into())
            }
            Err(e) => {
                house_repo.release_seat(new_house.id).await?;

                Err(e.into())
            }
        }
    }
}
