use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(pk_auto(Usuario::Id))
                    .col(string(Usuario::NombreUsuario))
                    .col(string(Usuario::NombreEmpresa))
                    .col(string_uniq(Usuario::Email))
                    .col(string(Usuario::ContrasenaHash))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Usuario {
    Table,
    Id,
    NombreUsuario,
    NombreEmpresa,
    Email,
    ContrasenaHash,
}
