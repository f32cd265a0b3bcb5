use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CandidateLog::Table)
                    .if_not_exists()
                    .col(pk_auto(CandidateLog::Id))
                    .col(string(CandidateLog::Name))
                    .col(string(CandidateLog::ActivityDetails))
                    .col(timestamp(CandidateLog::TimeIn))
                    .col(timestamp_null(CandidateLog::TimeOut))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CandidateLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CandidateLog {
    Table,
    Id,
    Name,
    ActivityDetails,
    TimeIn,
    TimeOut,
}
