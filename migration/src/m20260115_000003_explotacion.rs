use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000002_titular::Titular;

static IDX_EXPLOTACION_ID_TITULAR: &str = "idx-explotacion-id_titular";
static FK_EXPLOTACION_ID_TITULAR: &str = "fk-explotacion-id_titular";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Explotacion::Table)
                    .if_not_exists()
                    .col(pk_auto(Explotacion::Id))
                    .col(string(Explotacion::Codigo))
                    .col(string(Explotacion::Nombre))
                    .col(string(Explotacion::Direccion))
                    .col(string(Explotacion::Localidad))
                    .col(string(Explotacion::Provincia))
                    .col(string(Explotacion::CodigoPostal))
                    .col(string(Explotacion::Especies))
                    .col(string(Explotacion::Coordenadas))
                    .col(integer(Explotacion::IdTitular))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXPLOTACION_ID_TITULAR)
                    .table(Explotacion::Table)
                    .col(Explotacion::IdTitular)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXPLOTACION_ID_TITULAR)
                    .from_tbl(Explotacion::Table)
                    .from_col(Explotacion::IdTitular)
                    .to_tbl(Titular::Table)
                    .to_col(Titular::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXPLOTACION_ID_TITULAR)
                    .table(Explotacion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXPLOTACION_ID_TITULAR)
                    .table(Explotacion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Explotacion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Explotacion {
    Table,
    Id,
    Codigo,
    Nombre,
    Direccion,
    Localidad,
    Provincia,
    CodigoPostal,
    Especies,
    Coordenadas,
    IdTitular,
}
