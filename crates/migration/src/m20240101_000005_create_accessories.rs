//! Create `accessories` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accessories::Table)
                    .if_not_exists()
                    .col(uuid(Accessories::Id).primary_key())
                    .col(string_len(Accessories::Name, 60).unique_key().not_null())
                    .col(double(Accessories::Price).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Accessories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Accessories { Table, Id, Name, Price }
