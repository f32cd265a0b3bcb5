use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(House::Table)
                    .if_not_exists()
                    .col(pk_auto(House::Id))
                    .col(string(House::Name))
                    .col(string(House::Gender))
                    .col(integer(House::Capacity))
                    .col(integer(House::CurrentOccupancy).default(0))
                    .col(timestamp(House::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(House::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum House {
    Table,
    Id,
    Name,
    Gender,
    Capacity,
    CurrentOccupancy,
    CreatedAt,
}
