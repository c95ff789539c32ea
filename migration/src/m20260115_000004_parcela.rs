use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_explotacion::Explotacion;

static IDX_PARCELA_ID_EXPLOTACION: &str = "idx-parcela-id_explotacion";
static FK_PARCELA_ID_EXPLOTACION: &str = "fk-parcela-id_explotacion";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parcela::Table)
                    .if_not_exists()
                    .col(pk_auto(Parcela::Id))
                    .col(string(Parcela::Coordenadas))
                    .col(double(Parcela::Extension))
                    .col(integer(Parcela::IdExplotacion))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARCELA_ID_EXPLOTACION)
                    .table(Parcela::Table)
                    .col(Parcela::IdExplotacion)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARCELA_ID_EXPLOTACION)
                    .from_tbl(Parcela::Table)
                    .from_col(Parcela::IdExplotacion)
                    .to_tbl(Explotacion::Table)
                    .to_col(Explotacion::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARCELA_ID_EXPLOTACION)
                    .table(Parcela::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARCELA_ID_EXPLOTACION)
                    .table(Parcela::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Parcela::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Parcela {
    Table,
    Id,
    Coordenadas,
    Extension,
    IdExplotacion,
}
