//! Create `colors` table.
//!
//! RGB channels are bounded to 0..=255 by check constraints.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Colors::Table)
                    .if_not_exists()
                    .col(uuid(Colors::Id).primary_key())
                    .col(string_len(Colors::Name, 45).unique_key().not_null())
                    .col(double(Colors::Price).not_null())
                    .col(integer(Colors::RedValue).not_null().check(Expr::col(Colors::RedValue).between(0, 255)))
                    .col(integer(Colors::GreenValue).not_null().check(Expr::col(Colors::GreenValue).between(0, 255)))
                    .col(integer(Colors::BlueValue).not_null().check(Expr::col(Colors::BlueValue).between(0, 255)))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Colors::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Colors { Table, Id, Name, Price, RedValue, GreenValue, BlueValue }
