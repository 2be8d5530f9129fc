use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Models: lookup by brand
        manager
            .create_index(
                Index::create()
                    .name("idx_models_brand")
                    .table(Models::Table)
                    .col(Models::BrandId)
                    .to_owned(),
            )
            .await?;

        // Cars: list filters on customer and sales person
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_customer")
                    .table(Cars::Table)
                    .col(Cars::CustomersId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_sales_person")
                    .table(Cars::Table)
                    .col(Cars::SalesPeopleId)
                    .to_owned(),
            )
            .await?;

        // Cars: past-deadline filter
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_purchase_deadline")
                    .table(Cars::Table)
                    .col(Cars::PurchaseDeadline)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_models_brand").table(Models::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cars_customer").table(Cars::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cars_sales_person").table(Cars::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cars_purchase_deadline").table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Models { Table, BrandId }

#[derive(DeriveIden)]
enum Cars { Table, CustomersId, SalesPeopleId, PurchaseDeadline }
