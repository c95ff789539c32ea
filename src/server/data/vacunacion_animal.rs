use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::vacunacion::CreateVacunacionAnimalDto;

pub struct VacunacionAnimalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacunacionAnimalRepository<'a> {
    /// Creates a new instance of [`VacunacionAnimalRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::vacunacion_animal::Model>, DbErr> {
        entity::prelude::VacunacionAnimal::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        vacunacion_animal_id: i32,
    ) -> Result<Option<entity::vacunacion_animal::Model>, DbErr> {
        entity::prelude::VacunacionAnimal::find_by_id(vacunacion_animal_id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateVacunacionAnimalDto,
    ) -> Result<entity::vacunacion_animal::Model, DbErr> {
        let vacunacion_animal = entity::vacunacion_animal::ActiveModel {
            id_vacunacion: ActiveValue::Set(dto.id_vacunacion),
            id_animal: ActiveValue::Set(dto.id_animal),
            ..Default::default()
        };

        vacunacion_animal.insert(self.db).await
    }

    pub async fn update(
        &self,
        vacunacion_animal_id: i32,
        dto: &CreateVacunacionAnimalDto,
    ) -> Result<Option<entity::vacunacion_animal::Model>, DbErr> {
        let vacunacion_animal =
            match entity::prelude::VacunacionAnimal::find_by_id(vacunacion_animal_id)
                .one(self.db)
                .await?
            {
                Some(vacunacion_animal) => vacunacion_animal,
                None => return Ok(None),
            };

        let mut vacunacion_animal_am = vacunacion_animal.into_active_model();
        vacunacion_animal_am.id_vacunacion = ActiveValue::Set(dto.id_vacunacion);
        vacunacion_animal_am.id_animal = ActiveValue::Set(dto.id_animal);

        let vacunacion_animal = vacunacion_animal_am.update(self.db).await?;

        Ok(Some(vacunacion_animal))
    }

    pub async fn delete(&self, vacunacion_animal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::VacunacionAnimal::delete_by_id(vacunacion_animal_id)
            .exec(self.db)
            .await
    }
}
