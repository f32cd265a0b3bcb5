use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(string_uniq(Payment::ClientReference))
                    .col(string(Payment::IndexNumber))
                    .col(double(Payment::Amount))
                    .col(string(Payment::Status))
                    .col(string_null(Payment::CheckoutId))
                    .col(timestamp(Payment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    ClientReference,
    IndexNumber,
    Amount,
    Status,
    CheckoutId,
    CreatedAt,
}
