//! Create `sales_people` table. Passwords are stored as argon2 PHC strings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesPeople::Table)
                    .if_not_exists()
                    .col(uuid(SalesPeople::Id).primary_key())
                    .col(string_len(SalesPeople::Email, 100).unique_key().not_null())
                    .col(string_len(SalesPeople::HashedPassword, 130).not_null())
                    .col(string_len(SalesPeople::FirstName, 45).not_null())
                    .col(string_len(SalesPeople::LastName, 45).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SalesPeople::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SalesPeople { Table, Id, Email, HashedPassword, FirstName, LastName }
