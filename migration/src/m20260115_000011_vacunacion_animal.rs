use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000005_animal::Animal, m20260115_000010_vacunacion::Vacunacion};

static IDX_VACUNACION_ANIMAL_ID_ANIMAL: &str = "idx-vacunacion_animal-id_animal";
static FK_VACUNACION_ANIMAL_ID_VACUNACION: &str = "fk-vacunacion_animal-id_vacunacion";
static FK_VACUNACION_ANIMAL_ID_ANIMAL: &str = "fk-vacunacion_animal-id_animal";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VacunacionAnimal::Table)
                    .if_not_exists()
                    .col(pk_auto(VacunacionAnimal::Id))
                    .col(integer(VacunacionAnimal::IdVacunacion))
                    .col(integer(VacunacionAnimal::IdAnimal))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VACUNACION_ANIMAL_ID_ANIMAL)
                    .table(VacunacionAnimal::Table)
                    .col(VacunacionAnimal::IdAnimal)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VACUNACION_ANIMAL_ID_VACUNACION)
                    .from_tbl(VacunacionAnimal::Table)
                    .from_col(VacunacionAnimal::IdVacunacion)
                    .to_tbl(Vacunacion::Table)
                    .to_col(Vacunacion::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VACUNACION_ANIMAL_ID_ANIMAL)
                    .from_tbl(VacunacionAnimal::Table)
                    .from_col(VacunacionAnimal::IdAnimal)
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
                    .name(FK_VACUNACION_ANIMAL_ID_ANIMAL)
                    .table(VacunacionAnimal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VACUNACION_ANIMAL_ID_VACUNACION)
                    .table(VacunacionAnimal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VACUNACION_ANIMAL_ID_ANIMAL)
                    .table(VacunacionAnimal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VacunacionAnimal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VacunacionAnimal {
    Table,
    Id,
    IdVacunacion,
    IdAnimal,
}
