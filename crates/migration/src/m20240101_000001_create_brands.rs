//! Create `brands` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brands::Table)
                    .if_not_exists()
                    .col(uuid(Brands::Id).primary_key())
                    .col(string_len(Brands::Name, 60).unique_key().not_null())
                    .col(string_len(Brands::LogoUrl, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Brands::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Brands { Table, Id, Name, LogoUrl }
