use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000005_animal::Animal;

static IDX_MOVIMIENTO_ID_ANIMAL: &str = "idx-movimiento-id_animal";
static FK_MOVIMIENTO_ID_ANIMAL: &str = "fk-movimiento-id_animal";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movimiento::Table)
                    .if_not_exists()
                    .col(pk_auto(Movimiento::Id))
                    .col(string(Movimiento::Tipo))
                    .col(date(Movimiento::Fecha))
                    .col(string(Movimiento::Motivo))
                    .col(string(Movimiento::ProcedenciaDestino))
                    .col(integer(Movimiento::IdAnimal))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MOVIMIENTO_ID_ANIMAL)
                    .table(Movimiento::Table)
                    .col(Movimiento::IdAnimal)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MOVIMIENTO_ID_ANIMAL)
                    .from_tbl(Movimiento::Table)
                    .from_col(Movimiento::IdAnimal)
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
                    .name(FK_MOVIMIENTO_ID_ANIMAL)
                    .table(Movimiento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MOVIMIENTO_ID_ANIMAL)
                    .table(Movimiento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Movimiento::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Movimiento {
    Table,
    Id,
    Tipo,
    Fecha,
    Motivo,
    ProcedenciaDestino,
    IdAnimal,
}
