//! Create `cars_has_insurances` join table linking cars to insurances.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarsHasInsurances::Table)
                    .if_not_exists()
                    .col(uuid(CarsHasInsurances::CarsId).not_null())
                    .col(uuid(CarsHasInsurances::InsurancesId).not_null())
                    .primary_key(Index::create().col(CarsHasInsurances::CarsId).col(CarsHasInsurances::InsurancesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_has_insurances_cars")
                            .from(CarsHasInsurances::Table, CarsHasInsurances::CarsId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_has_insurances_insurances")
                            .from(CarsHasInsurances::Table, CarsHasInsurances::InsurancesId)
                            .to(Insurances::Table, Insurances::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CarsHasInsurances::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CarsHasInsurances { Table, CarsId, InsurancesId }

#[derive(DeriveIden)]
enum Cars { Table, Id }

#[derive(DeriveIden)]
enum Insurances { Table, Id }
