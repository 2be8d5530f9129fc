//! Create `customers` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(uuid(Customers::Id).primary_key())
                    .col(string_len(Customers::Email, 100).unique_key().not_null())
                    .col(ColumnDef::new(Customers::PhoneNumber).string_len(30).null())
                    .col(string_len(Customers::FirstName, 45).not_null())
                    .col(string_len(Customers::LastName, 45).not_null())
                    .col(ColumnDef::new(Customers::Address).string_len(255).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customers { Table, Id, Email, PhoneNumber, FirstName, LastName, Address }
