//! Create `models_has_colors` join table (colors offered by a model).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModelsHasColors::Table)
                    .if_not_exists()
                    .col(uuid(ModelsHasColors::ModelsId).not_null())
                    .col(uuid(ModelsHasColors::ColorsId).not_null())
                    .primary_key(
                        Index::create()
                            .col(ModelsHasColors::ModelsId)
                            .col(ModelsHasColors::ColorsId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_models_has_colors_models")
                            .from(ModelsHasColors::Table, ModelsHasColors::ModelsId)
                            .to(Models::Table, Models::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_models_has_colors_colors")
                            .from(ModelsHasColors::Table, ModelsHasColors::ColorsId)
                            .to(Colors::Table, Colors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ModelsHasColors::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ModelsHasColors { Table, ModelsId, ColorsId }

#[derive(DeriveIden)]
enum Models { Table, Id }

#[derive(DeriveIden)]
enum Colors { Table, Id }
