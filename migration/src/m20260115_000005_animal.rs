use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000003_explotacion::Explotacion;

static IDX_ANIMAL_ID_EXPLOTACION: &str = "idx-animal-id_explotacion";
static FK_ANIMAL_ID_EXPLOTACION: &str = "fk-animal-id_explotacion";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animal::Table)
                    .if_not_exists()
                    .col(pk_auto(Animal::Id))
                    .col(string_uniq(Animal::Identificacion))
                    .col(string(Animal::Especie))
                    .col(string(Animal::Estado))
                    .col(date(Animal::FechaNacimiento))
                    .col(date(Animal::FechaAlta))
                    .col(integer(Animal::IdExplotacion))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ANIMAL_ID_EXPLOTACION)
                    .table(Animal::Table)
                    .col(Animal::IdExplotacion)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ANIMAL_ID_EXPLOTACION)
                    .from_tbl(Animal::Table)
                    .from_col(Animal::IdExplotacion)
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
                    .name(FK_ANIMAL_ID_EXPLOTACION)
                    .table(Animal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ANIMAL_ID_EXPLOTACION)
                    .table(Animal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Animal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Animal {
    Table,
    Id,
    Identificacion,
    Especie,
    Estado,
    FechaNacimiento,
    FechaAlta,
    IdExplotacion,
}
