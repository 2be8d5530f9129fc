//! Create `insurances` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Insurances::Table)
                    .if_not_exists()
                    .col(uuid(Insurances::Id).primary_key())
                    .col(string_len(Insurances::Name, 45).unique_key().not_null())
                    .col(double(Insurances::Price).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Insurances::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Insurances { Table, Id, Name, Price }
