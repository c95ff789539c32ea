use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_explotacion::Explotacion;

static IDX_ALIMENTACION_FACTURA: &str = "idx-alimentacion-factura-id_explotacion";
static FK_ALIMENTACION_ID_EXPLOTACION: &str = "fk-alimentacion-id_explotacion";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alimentacion::Table)
                    .if_not_exists()
                    .col(pk_auto(Alimentacion::Id))
                    .col(date(Alimentacion::Fecha))
                    .col(string(Alimentacion::Tipo))
                    .col(double(Alimentacion::Cantidad))
                    .col(string(Alimentacion::Lote))
                    .col(string(Alimentacion::Factura))
                    .col(integer(Alimentacion::IdExplotacion))
                    .to_owned(),
            )
            .await?;

        // The same invoice may be registered under different holdings
        manager
            .create_index(
                Index::create()
                    .name(IDX_ALIMENTACION_FACTURA)
                    .table(Alimentacion::Table)
                    .col(Alimentacion::Factura)
                    .col(Alimentacion::IdExplotacion)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALIMENTACION_ID_EXPLOTACION)
                    .from_tbl(Alimentacion::Table)
                    .from_col(Alimentacion::IdExplotacion)
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
                    .name(FK_ALIMENTACION_ID_EXPLOTACION)
                    .table(Alimentacion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ALIMENTACION_FACTURA)
                    .table(Alimentacion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alimentacion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Alimentacion {
    Table,
    Id,
    Fecha,
    Tipo,
    Cantidad,
    Lote,
    Factura,
    IdExplotacion,
}
