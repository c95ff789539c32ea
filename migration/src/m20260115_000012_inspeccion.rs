use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_explotacion::Explotacion;

static IDX_INSPECCION_NUMERO_ACTA: &str = "idx-inspeccion-numero_acta-id_explotacion";
static FK_INSPECCION_ID_EXPLOTACION: &str = "fk-inspeccion-id_explotacion";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inspeccion::Table)
                    .if_not_exists()
                    .col(pk_auto(Inspeccion::Id))
                    .col(date(Inspeccion::Fecha))
                    .col(boolean(Inspeccion::Oficial))
                    .col(string(Inspeccion::Tipo))
                    .col(string(Inspeccion::NumeroActa))
                    .col(integer(Inspeccion::IdExplotacion))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INSPECCION_NUMERO_ACTA)
                    .table(Inspeccion::Table)
                    .col(Inspeccion::NumeroActa)
                    .col(Inspeccion::IdExplotacion)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSPECCION_ID_EXPLOTACION)
                    .from_tbl(Inspeccion::Table)
                    .from_col(Inspeccion::IdExplotacion)
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
                    .name(FK_INSPECCION_ID_EXPLOTACION)
                    .table(Inspeccion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INSPECCION_NUMERO_ACTA)
                    .table(Inspeccion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Inspeccion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Inspeccion {
    Table,
    Id,
    Fecha,
    Oficial,
    Tipo,
    NumeroActa,
    IdExplotacion,
}
