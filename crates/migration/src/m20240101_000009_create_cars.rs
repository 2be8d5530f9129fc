//! Create `cars` table with FKs to `models`, `colors`, `customers` and `sales_people`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(uuid(Cars::Id).primary_key())
                    .col(double(Cars::TotalPrice).not_null())
                    .col(date(Cars::PurchaseDeadline).not_null())
                    .col(uuid(Cars::ModelsId).not_null())
                    .col(uuid(Cars::ColorsId).not_null())
                    .col(uuid(Cars::CustomersId).not_null())
                    .col(uuid(Cars::SalesPeopleId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_models")
                            .from(Cars::Table, Cars::ModelsId)
                            .to(Models::Table, Models::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_colors")
                            .from(Cars::Table, Cars::ColorsId)
                            .to(Colors::Table, Colors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_customers")
                            .from(Cars::Table, Cars::CustomersId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_sales_people")
                            .from(Cars::Table, Cars::SalesPeopleId)
                            .to(SalesPeople::Table, SalesPeople::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cars::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cars { Table, Id, TotalPrice, PurchaseDeadline, ModelsId, ColorsId, CustomersId, SalesPeopleId }

#[derive(DeriveIden)]
enum Models { Table, Id }

#[derive(DeriveIden)]
enum Colors { Table, Id }

#[derive(DeriveIden)]
enum Customers { Table, Id }

#[derive(DeriveIden)]
enum SalesPeople { Table, Id }
