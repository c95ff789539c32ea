use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::animal::CreateAnimalDto;

pub struct AnimalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnimalRepository<'a> {
    /// Creates a new instance of [`AnimalRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::animal::Model>, DbErr> {
        entity::prelude::Animal::find().all(self.db).await
    }

    pub async fn get_by_id(&self, animal_id: i32) -> Result<Option<entity::animal::Model>, DbErr> {
        entity::prelude::Animal::find_by_id(animal_id)
            .one(self.db)
            .await
    }

    /// Get an animal by its system-wide unique identification code
    pub async fn get_by_identificacion(
        &self,
        identificacion: &str,
    ) -> Result<Option<entity::animal::Model>, DbErr> {
        entity::prelude::Animal::find()
            .filter(entity::animal::Column::Identificacion.eq(identificacion))
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: animals of many holdings in
    /// one statement.
    pub async fn get_by_explotacion_ids(
        &self,
        explotacion_ids: &[i32],
    ) -> Result<Vec<entity::animal::Model>, DbErr> {
        entity::prelude::Animal::find()
            .filter(entity::animal::Column::IdExplotacion.is_in(explotacion_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn create(&self, dto: &CreateAnimalDto) -> Result<entity::animal::Model, DbErr> {
        let animal = entity::animal::ActiveModel {
            identificacion: ActiveValue::Set(dto.identificacion.clone()),
            especie: ActiveValue::Set(dto.especie.clone()),
            estado: ActiveValue::Set(dto.estado.clone()),
            fecha_nacimiento: ActiveValue::Set(dto.fecha_nacimiento),
            fecha_alta: ActiveValue::Set(dto.fecha_alta),
            id_explotacion: ActiveValue::Set(dto.id_explotacion),
            ..Default::default()
        };

        animal.insert(self.db).await
    }

    pub async fn update(
        &self,
        animal_id: i32,
        dto: &CreateAnimalDto,
    ) -> Result<Option<entity::animal::Model>, DbErr> {
        let animal = match entity::prelude::Animal::find_by_id(animal_id)
            .one(self.db)
            .await?
        {
            Some(animal) => animal,
            None => return Ok(None),
        };

        let mut animal_am = animal.into_active_model();
        animal_am.identificacion = ActiveValue::Set(dto.identificacion.clone());
        animal_am.especie = ActiveValue::Set(dto.especie.clone());
        animal_am.estado = ActiveValue::Set(dto.estado.clone());
        animal_am.fecha_nacimiento = ActiveValue::Set(dto.fecha_nacimiento);
        animal_am.fecha_alta = ActiveValue::Set(dto.fecha_alta);
        animal_am.id_explotacion = ActiveValue::Set(dto.id_explotacion);

        let animal = animal_am.update(self.db).await?;

        Ok(Some(animal))
    }

    pub async fn delete(&self, animal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Animal::delete_by_id(animal_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::{model::animal::CreateAnimalDto, server::data::animal::AnimalRepository};

    fn create_dto(identificacion: &str, id_explotacion: i32) -> CreateAnimalDto {
        CreateAnimalDto {
            identificacion: identificacion.to_string(),
            especie: "Ovino".to_string(),
            estado: "vivo".to_string(),
            fecha_nacimiento: factory::fecha(2024, 1, 10),
            fecha_alta: factory::fecha(2024, 2, 1),
            id_explotacion,
        }
    }

    async fn setup_explotacion(db: &DatabaseConnection) -> Result<i32, TestError> {
        let usuario = factory::insert_usuario(db, "dueno@example.com").await?;
        let titular = factory::insert_titular(db, "11111111A", usuario.id).await?;
        let explotacion = factory::insert_explotacion(db, "ES490000000001", titular.id).await?;

        Ok(explotacion.id)
    }

    #[tokio::test]
    /// Expect success when creating an animal with an unused identification
    async fn test_create_animal_success() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let explotacion_id = setup_explotacion(&test.db).await?;

        let animal_repository = AnimalRepository::new(&test.db);
        let result = animal_repository
            .create(&create_dto("ES0001", explotacion_id))
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    #[tokio::test]
    /// Expect Error when the identification is already used, even on another
    /// explotación: the code is unique system-wide
    async fn test_create_animal_duplicate_identificacion() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let explotacion_id = setup_explotacion(&test.db).await?;

        let animal_repository = AnimalRepository::new(&test.db);
        animal_repository
            .create(&create_dto("ES0001", explotacion_id))
            .await?;
        let result = animal_repository
            .create(&create_dto("ES0001", explotacion_id))
            .await;

        assert!(result.is_err());

        // Lookup by code still resolves to the original row
        let existing = animal_repository.get_by_identificacion("ES0001").await?;
        assert!(existing.is_some());

        Ok(())
    }

    #[tokio::test]
    /// Expect Ok(None) when updating an animal that does not exist
    async fn test_update_animal_none() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let explotacion_id = setup_explotacion(&test.db).await?;

        let animal_repository = AnimalRepository::new(&test.db);
        let result = animal_repository
            .update(999, &create_dto("ES0001", explotacion_id))
            .await?;

        assert!(result.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect the batch loader to only return animals of the requested holdings
    async fn test_get_by_explotacion_ids_filters() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "dueno@example.com").await?;
        let titular = factory::insert_titular(&test.db, "11111111A", usuario.id).await?;
        let explotacion_a = factory::insert_explotacion(&test.db, "ES-A", titular.id).await?;
        let explotacion_b = factory::insert_explotacion(&test.db, "ES-B", titular.id).await?;
        factory::insert_animal(&test.db, "ES0001", explotacion_a.id).await?;
        factory::insert_animal(&test.db, "ES0002", explotacion_b.id).await?;

        let animal_repository = AnimalRepository::new(&test.db);
        let animales = animal_repository
            .get_by_explotacion_ids(&[explotacion_a.id])
            .await?;

        assert_eq!(animales.len(), 1);
        assert_eq!(animales[0].identificacion, "ES0001");

        Ok(())
    }
}
