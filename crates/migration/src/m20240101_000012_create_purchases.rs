//! Create `purchases` table. A car appears here at most once.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Purchases::Table)
                    .if_not_exists()
                    .col(uuid(Purchases::Id).primary_key())
                    .col(uuid(Purchases::CarsId).unique_key().not_null())
                    .col(date(Purchases::DateOfPurchase).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchases_cars")
                            .from(Purchases::Table, Purchases::CarsId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Purchases::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Purchases { Table, Id, CarsId, DateOfPurchase }

#[derive(DeriveIden)]
enum Cars { Table, Id }
