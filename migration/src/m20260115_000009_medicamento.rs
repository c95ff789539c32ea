use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_explotacion::Explotacion;

static IDX_MEDICAMENTO_FACTURA: &str = "idx-medicamento-factura-id_explotacion";
static FK_MEDICAMENTO_ID_EXPLOTACION: &str = "fk-medicamento-id_explotacion";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Medicamento::Table)
                    .if_not_exists()
                    .col(pk_auto(Medicamento::Id))
                    .col(date(Medicamento::Fecha))
                    .col(string(Medicamento::Receta))
                    .col(string(Medicamento::Medicamento))
                    .col(string(Medicamento::Factura))
                    .col(integer(Medicamento::IdExplotacion))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDICAMENTO_FACTURA)
                    .table(Medicamento::Table)
                    .col(Medicamento::Factura)
                    .col(Medicamento::IdExplotacion)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEDICAMENTO_ID_EXPLOTACION)
                    .from_tbl(Medicamento::Table)
                    .from_col(Medicamento::IdExplotacion)
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
                    .name(FK_MEDICAMENTO_ID_EXPLOTACION)
                    .table(Medicamento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEDICAMENTO_FACTURA)
                    .table(Medicamento::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Medicamento::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Medicamento {
    Table,
    Id,
    Fecha,
    Receta,
    Medicamento,
    Factura,
    IdExplotacion,
}
