//! Create `models` table with FK to `brands`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Models::Table)
                    .if_not_exists()
                    .col(uuid(Models::Id).primary_key())
                    .col(string_len(Models::Name, 60).unique_key().not_null())
                    .col(double(Models::Price).not_null())
                    .col(uuid(Models::BrandId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_models_brands")
                            .from(Models::Table, Models::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Models::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Models { Table, Id, Name, Price, BrandId }

#[derive(DeriveIden)]
enum Brands { Table, Id }
