use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_usuario::Usuario;

static IDX_TITULAR_ID_USUARIO: &str = "idx-titular-id_usuario";
static FK_TITULAR_ID_USUARIO: &str = "fk-titular-id_usuario";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Titular::Table)
                    .if_not_exists()
                    .col(pk_auto(Titular::Id))
                    .col(string(Titular::Nombre))
                    .col(string_uniq(Titular::Nif))
                    .col(string(Titular::Domicilio))
                    .col(string(Titular::Localidad))
                    .col(string(Titular::Provincia))
                    .col(string(Titular::CodigoPostal))
                    .col(string(Titular::Telefono))
                    .col(integer(Titular::IdUsuario))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TITULAR_ID_USUARIO)
                    .table(Titular::Table)
                    .col(Titular::IdUsuario)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TITULAR_ID_USUARIO)
                    .from_tbl(Titular::Table)
                    .from_col(Titular::IdUsuario)
                    .to_tbl(Usuario::Table)
                    .to_col(Usuario::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TITULAR_ID_USUARIO)
                    .table(Titular::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TITULAR_ID_USUARIO)
                    .table(Titular::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Titular::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Titular {
    Table,
    Id,
    Nombre,
    Nif,
    Domicilio,
    Localidad,
    Provincia,
    CodigoPostal,
    Telefono,
    IdUsuario,
}
