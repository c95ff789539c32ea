use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000005_animal::Animal;

static IDX_INCIDENCIA_ID_ANIMAL: &str = "idx-incidencia-id_animal";
static FK_INCIDENCIA_ID_ANIMAL: &str = "fk-incidencia-id_animal";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Incidencia::Table)
                    .if_not_exists()
                    .col(pk_auto(Incidencia::Id))
                    .col(date(Incidencia::Fecha))
                    .col(string(Incidencia::Descripcion))
                    .col(string_null(Incidencia::CodigoAnterior))
                    .col(string_null(Incidencia::CodigoActual))
                    .col(integer(Incidencia::IdAnimal))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INCIDENCIA_ID_ANIMAL)
                    .table(Incidencia::Table)
                    .col(Incidencia::IdAnimal)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INCIDENCIA_ID_ANIMAL)
                    .from_tbl(Incidencia::Table)
                    .from_col(Incidencia::IdAnimal)
                    .to_tbl(Animal::Table)
                    .to_col(Animal::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INCIDENCIA_ID_ANIMAL)
                    .table(Incidencia::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INCIDENCIA_ID_ANIMAL)
                    .table(Incidencia::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Incidencia::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Incidencia {
    Table,
    Id,
    Fecha,
    Descripcion,
    CodigoAnterior,
    CodigoActual,
    IdAnimal,
}
