use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, Order, QueryFilter, QueryOrder,
};

use crate::model::api::{CreateCandidateDto, UpdateCandidateDto};

pub struct CandidateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateRepository<'a> {
    /// Creates a new instance of [`CandidateRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new candidate record
    pub async fn create(
        &self,
        dto: CreateCandidateDto,
    ) -> Result<entity::candidate::Model, DbErr> {
        let candidate = entity::candidate::ActiveModel {
            index_number: ActiveValue::Set(dto.index_number),
            surname: ActiveValue::Set(dto.surname),
            other_names: ActiveValue::Set(dto.other_names),
            gender: ActiveValue::Set(dto.gender),
            programme: ActiveValue::Set(dto.programme),
            residence: ActiveValue::Set(dto.residence),
            aggregate: ActiveValue::Set(dto.aggregate),
            fee_paid: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        candidate.insert(self.db).await
    }

    pub async fn find_by_index_number(
        &self,
        index_number: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::IndexNumber.eq(index_number))
            .one(self.db)
            .await
    }

    pub async fn find_by_serial_number(
        &self,
        serial_number: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::SerialNumber.eq(serial_number))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .order_by_asc(entity::candidate::Column::IndexNumber)
            .all(self.db)
            .await
    }

    /// Applies an admin edit or an applicant form submission to a candidate.
    /// Only fields present in the dto are written.
    pub async fn update_details(
        &self,
        index_number: &str,
        dto: UpdateCandidateDto,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some(candidate) = self.find_by_index_number(index_number).await? else {
            return Ok(None);
        };

        let mut candidate: entity::candidate::ActiveModel = candidate.into();

        if let Some(surname) = dto.surname {
            candidate.surname = ActiveValue::Set(surname);
        }
        if let Some(other_names) = dto.other_names {
            candidate.other_names = ActiveValue::Set(other_names);
        }
        if let Some(gender) = dto.gender {
            candidate.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(programme) = dto.programme {
            candidate.programme = ActiveValue::Set(Some(programme));
        }
        if let Some(residence) = dto.residence {
            candidate.residence = ActiveValue::Set(Some(residence));
        }
        if let Some(aggregate) = dto.aggregate {
            candidate.aggregate = ActiveValue::Set(Some(aggregate));
        }
        if let Some(phone_number) = dto.phone_number {
            candidate.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(guardian_info) = dto.guardian_info {
            candidate.guardian_info = ActiveValue::Set(Some(guardian_info));
        }
        if let Some(additional_info) = dto.additional_info {
            candidate.additional_info = ActiveValue::Set(Some(additional_info));
        }
        if let Some(academic_info) = dto.academic_info {
            candidate.academic_info = ActiveValue::Set(Some(academic_info));
        }
        if let Some(uploads) = dto.uploads {
            candidate.uploads = ActiveValue::Set(Some(uploads));
        }
        candidate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(candidate.update(self.db).await?))
    }

    /// Deletes a candidate
    ///
    /// Returns OK regardless of the candidate existing, to confirm the
    /// deletion check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, index_number: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Candidate::delete_many()
            .filter(entity::candidate::Column::IndexNumber.eq(index_number))
            .exec(self.db)
            .await
    }

    pub async fn set_fee_paid(
        &self,
        index_number: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some(candidate) = self.find_by_index_number(index_number).await? else {
            return Ok(None);
        };

        let mut candidate: entity::candidate::ActiveModel = candidate.into();
        candidate.fee_paid = ActiveValue::Set(true);
        candidate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(candidate.update(self.db).await?))
    }

    /// Persists an issued credential pair. The pin must already be hashed.
    pub async fn set_credentials(
        &self,
        index_number: &str,
        serial_number: &str,
        pin_hash: &str,
        phone_number: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some(candidate) = self.find_by_index_number(index_number).await? else {
            return Ok(None);
        };

        let mut candidate: entity::candidate::ActiveModel = candidate.into();
        candidate.serial_number = ActiveValue::Set(Some(serial_number.to_string()));
        candidate.pin = ActiveValue::Set(Some(pin_hash.to_string()));
        candidate.phone_number = ActiveValue::Set(Some(phone_number.to_string()));
        candidate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(candidate.update(self.db).await?))
    }

    /// Reverts an issued credential pair after a failed delivery so the
    /// candidate never holds credentials that were not communicated.
    pub async fn clear_credentials(
        &self,
        index_number: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some(candidate) = self.find_by_index_number(index_number).await? else {
            return Ok(None);
        };

        let mut candidate: entity::candidate::ActiveModel = candidate.into();
        candidate.serial_number = ActiveValue::Set(None);
        candidate.pin = ActiveValue::Set(None);
        candidate.phone_number = ActiveValue::Set(None);
        candidate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(candidate.update(self.db).await?))
    }

    /// Replaces only the pin hash, used by the PIN recovery path.
    pub async fn set_pin(
        &self,
        index_number: &str,
        pin_hash: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some(candidate) = self.find_by_index_number(index_number).await? else {
            return Ok(None);
        };

        let mut candidate: entity::candidate::ActiveModel = candidate.into();
        candidate.pin = ActiveValue::Set(Some(pin_hash.to_string()));
        candidate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(candidate.update(self.db).await?))
    }

    /// Links a candidate to a house. Sets gender as well when the record has
    /// none so later allocations see a consistent value.
    pub async fn set_house(
        &self,
        index_number: &str,
        house_id: i32,
        house_name: &str,
        gender: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some(candidate) = self.find_by_index_number(index_number).await? else {
            return Ok(None);
        };

        let gender_missing = candidate.gender.is_none();

        let mut candidate: entity::candidate::ActiveModel = candidate.into();
        candidate.house_id = ActiveValue::Set(Some(house_id));
        candidate.house_name = ActiveValue::Set(Some(house_name.to_string()));
        if gender_missing {
            candidate.gender = ActiveValue::Set(Some(gender.to_string()));
        }
        candidate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(candidate.update(self.db).await?))
    }

    /// Stamps the generated application number onto a candidate.
    ///
    /// A duplicate number surfaces as a unique-index violation from the
    /// database; callers treat that as a retryable collision.
    pub async fn set_application_number(
        &self,
        index_number: &str,
        application_number: &str,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let Some(candidate) = self.find_by_index_number(index_number).await? else {
            return Ok(None);
        };

        let mut candidate: entity::candidate::ActiveModel = candidate.into();
        candidate.application_number = ActiveValue::Set(Some(application_number.to_string()));
        candidate.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(candidate.update(self.db).await?))
    }

    /// Returns the highest application number under the given daily prefix.
    ///
    /// The suffix is zero-padded to 4 digits but widens once a day passes
    /// 9999 numbers, so ordering is by length first and value second; a plain
    /// lexicographic sort would rank `-9999` above `-10000`.
    pub async fn latest_application_number(&self, prefix: &str) -> Result<Option<String>, DbErr> {
        let candidate = entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::ApplicationNumber.like(format!("{}%", prefix)))
            .order_by(
                Expr::expr(Func::char_length(Expr::col(
                    entity::candidate::Column::ApplicationNumber,
                ))),
                Order::Desc,
            )
            .order_by_desc(entity::candidate::Column::ApplicationNumber)
            .one(self.db)
            .await?;

        Ok(candidate.and_then(|c| c.application_number))
    }
}
