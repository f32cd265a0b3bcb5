use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidate::Id))
                    .col(string_uniq(Candidate::IndexNumber))
                    .col(string(Candidate::Surname))
                    .col(string(Candidate::OtherNames))
                    .col(string_null(Candidate::Gender))
                    .col(string_null(Candidate::Programme))
                    .col(string_null(Candidate::Residence))
                    .col(integer_null(Candidate::Aggregate))
                    .col(boolean(Candidate::FeePaid).default(false))
                    .col(string_null(Candidate::SerialNumber))
                    .col(string_null(Candidate::Pin))
                    .col(string_null(Candidate::PhoneNumber))
                    .col(integer_null(Candidate::HouseId))
                    .col(string_null(Candidate::HouseName))
                    .col(string_null(Candidate::ApplicationNumber))
                    .col(json_null(Candidate::GuardianInfo))
                    .col(json_null(Candidate::AdditionalInfo))
                    .col(json_null(Candidate::AcademicInfo))
                    .col(json_null(Candidate::Uploads))
                    .col(timestamp(Candidate::CreatedAt))
                    .col(timestamp(Candidate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Sparse unique constraints: a candidate has no application number or
        // serial until finalized/credentialed, and NULLs do not collide.
        manager
            .create_index(
                Index::create()
                    .name("idx_candidate_application_number")
                    .table(Candidate::Table)
                    .col(Candidate::ApplicationNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_candidate_serial_number")
                    .table(Candidate::Table)
                    .col(Candidate::SerialNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Candidate {
    Table,
    Id,
    IndexNumber,
    Surname,
    OtherNames,
    Gender,
    Programme,
    Residence,
    Aggregate,
    FeePaid,
    SerialNumber,
    Pin,
    PhoneNumber,
    HouseId,
    HouseName,
    ApplicationNumber,
    GuardianInfo,
    AdditionalInfo,
    AcademicInfo,
    Uploads,
    CreatedAt,
    UpdatedAt,
}
