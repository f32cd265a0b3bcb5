use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolClass::Table)
                    .if_not_exists()
                    .col(pk_auto(SchoolClass::Id))
                    .col(string(SchoolClass::Name))
                    .col(string(SchoolClass::Programme))
                    .col(timestamp(SchoolClass::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolClass::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SchoolClass {
    Table,
    Id,
    Name,
    Programme,
    CreatedAt,
}
