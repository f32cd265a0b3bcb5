use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminLog::Id))
                    .col(string(AdminLog::Name))
                    .col(string(AdminLog::ActivityDetails))
                    .col(timestamp(AdminLog::TimeIn))
                    .col(timestamp_null(AdminLog::TimeOut))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AdminLog {
    Table,
    Id,
    Name,
    ActivityDetails,
    TimeIn,
    TimeOut,
}
