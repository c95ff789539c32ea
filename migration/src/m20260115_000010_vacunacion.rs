use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_explotacion::Explotacion;

static IDX_VACUNACION_FECHA_TIPO: &str = "idx-vacunacion-fecha-tipo-id_explotacion";
static FK_VACUNACION_ID_EXPLOTACION: &str = "fk-vacunacion-id_explotacion";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vacunacion::Table)
                    .if_not_exists()
                    .col(pk_auto(Vacunacion::Id))
                    .col(date(Vacunacion::Fecha))
                    .col(string(Vacunacion::Tipo))
                    .col(string(Vacunacion::Dosis))
                    .col(string(Vacunacion::NombreComercial))
                    .col(string(Vacunacion::Veterinario))
                    .col(integer(Vacunacion::IdExplotacion))
                    .to_owned(),
            )
            .await?;

        // One campaign of a given type per holding and day
        manager
            .create_index(
                Index::create()
                    .name(IDX_VACUNACION_FECHA_TIPO)
                    .table(Vacunacion::Table)
                    .col(Vacunacion::Fecha)
                    .col(Vacunacion::Tipo)
                    .col(Vacunacion::IdExplotacion)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VACUNACION_ID_EXPLOTACION)
                    .from_tbl(Vacunacion::Table)
                    .from_col(Vacunacion::IdExplotacion)
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
                    .name(FK_VACUNACION_ID_EXPLOTACION)
                    .table(Vacunacion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VACUNACION_FECHA_TIPO)
                    .table(Vacunacion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vacunacion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vacunacion {
    Table,
    Id,
    Fecha,
    Tipo,
    Dosis,
    NombreComercial,
    Veterinario,
    IdExplotacion,
}
