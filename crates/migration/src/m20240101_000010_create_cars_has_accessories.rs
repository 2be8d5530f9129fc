//! Create `cars_has_accessories` join table linking cars to accessories.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarsHasAccessories::Table)
                    .if_not_exists()
                    .col(uuid(CarsHasAccessories::CarsId).not_null())
                    .col(uuid(CarsHasAccessories::AccessoriesId).not_null())
                    .primary_key(Index::create().col(CarsHasAccessories::CarsId).col(CarsHasAccessories::AccessoriesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_has_accessories_cars")
                            .from(CarsHasAccessories::Table, CarsHasAccessories::CarsId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_has_accessories_accessories")
                            .from(CarsHasAccessories::Table, CarsHasAccessories::AccessoriesId)
                            .to(Accessories::Table, Accessories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CarsHasAccessories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CarsHasAccessories { Table, CarsId, AccessoriesId }

#[derive(DeriveIden)]
enum Cars { Table, Id }

#[derive(DeriveIden)]
enum Accessories { Table, Id }
