use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::vacunacion::CreateVacunacionDto;

pub struct VacunacionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacunacionRepository<'a> {
    /// Creates a new instance of [`VacunacionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::vacunacion::Model>, DbErr> {
        entity::prelude::Vacunacion::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        vacunacion_id: i32,
    ) -> Result<Option<entity::vacunacion::Model>, DbErr> {
        entity::prelude::Vacunacion::find_by_id(vacunacion_id)
            .one(self.db)
            .await
    }

    /// Get a campaign by its unique (fecha, tipo, explotación) combination
    pub async fn get_by_fecha_tipo(
        &self,
        fecha: NaiveDate,
        tipo: &str,
        explotacion_id: i32,
    ) -> Result<Option<entity::vacunacion::Model>, DbErr> {
        entity::prelude::Vacunacion::find()
            .filter(entity::vacunacion::Column::Fecha.eq(fecha))
            .filter(entity::vacunacion::Column::Tipo.eq(tipo))
            .filter(entity::vacunacion::Column::IdExplotacion.eq(explotacion_id))
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: for every animal in the set,
    /// its join rows together with the joined campaign.
    pub async fn get_by_animal_ids(
        &self,
        animal_ids: &[i32],
    ) -> Result<
        Vec<(
            entity::vacunacion_animal::Model,
            Option<entity::vacunacion::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::VacunacionAnimal::find()
            .filter(entity::vacunacion_animal::Column::IdAnimal.is_in(animal_ids.iter().copied()))
            .find_also_related(entity::vacunacion::Entity)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateVacunacionDto,
    ) -> Result<entity::vacunacion::Model, DbErr> {
        let vacunacion = entity::vacunacion::ActiveModel {
            fecha: ActiveValue::Set(dto.fecha),
            tipo: ActiveValue::Set(dto.tipo.clone()),
            dosis: ActiveValue::Set(dto.dosis.clone()),
            nombre_comercial: ActiveValue::Set(dto.nombre_comercial.clone()),
            veterinario: ActiveValue::Set(dto.veterinario.clone()),
            id_explotacion: ActiveValue::Set(dto.id_explotacion),
            ..Default::default()
        };

        vacunacion.insert(self.db).await
    }

    pub async fn update(
        &self,
        vacunacion_id: i32,
        dto: &CreateVacunacionDto,
    ) -> Result<Option<entity::vacunacion::Model>, DbErr> {
        let vacunacion = match entity::prelude::Vacunacion::find_by_id(vacunacion_id)
            .one(self.db)
            .await?
        {
            Some(vacunacion) => vacunacion,
            None => return Ok(None),
        };

        let mut vacunacion_am = vacunacion.into_active_model();
        vacunacion_am.fecha = ActiveValue::Set(dto.fecha);
        vacunacion_am.tipo = ActiveValue::Set(dto.tipo.clone());
        vacunacion_am.dosis = ActiveValue::Set(dto.dosis.clone());
        vacunacion_am.nombre_comercial = ActiveValue::Set(dto.nombre_comercial.clone());
        vacunacion_am.veterinario = ActiveValue::Set(dto.veterinario.clone());
        vacunacion_am.id_explotacion = ActiveValue::Set(dto.id_explotacion);

        let vacunacion = vacunacion_am.update(self.db).await?;

        Ok(Some(vacunacion))
    }

    pub async fn delete(&self, vacunacion_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vacunacion::delete_by_id(vacunacion_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;

    use crate::server::data::vacunacion::VacunacionRepository;

    #[tokio::test]
    /// Expect the join loader to resolve each animal's campaigns
    async fn test_get_by_animal_ids_resolves_join() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "dueno@example.com").await?;
        let titular = factory::insert_titular(&test.db, "11111111A", usuario.id).await?;
        let explotacion = factory::insert_explotacion(&test.db, "ES-A", titular.id).await?;
        let animal_a = factory::insert_animal(&test.db, "ES0001", explotacion.id).await?;
        let animal_b = factory::insert_animal(&test.db, "ES0002", explotacion.id).await?;
        let vacunacion =
            factory::insert_vacunacion(&test.db, "aftosa", explotacion.id, factory::fecha(2024, 6, 1))
                .await?;
        factory::insert_vacunacion_animal(&test.db, vacunacion.id, animal_a.id).await?;

        let vacunacion_repository = VacunacionRepository::new(&test.db);
        let rows = vacunacion_repository
            .get_by_animal_ids(&[animal_a.id, animal_b.id])
            .await?;

        assert_eq!(rows.len(), 1);
        let (join_row, campaign) = &rows[0];
        assert_eq!(join_row.id_animal, animal_a.id);
        assert_eq!(campaign.as_ref().unwrap().tipo, "aftosa");

        Ok(())
    }

    #[tokio::test]
    /// Expect Error when repeating (fecha, tipo) within an explotación
    async fn test_create_duplicate_fecha_tipo() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "dueno@example.com").await?;
        let titular = factory::insert_titular(&test.db, "11111111A", usuario.id).await?;
        let explotacion = factory::insert_explotacion(&test.db, "ES-A", titular.id).await?;
        factory::insert_vacunacion(&test.db, "aftosa", explotacion.id, factory::fecha(2024, 6, 1))
            .await?;

        let vacunacion_repository = VacunacionRepository::new(&test.db);
        let result = vacunacion_repository
            .create(&crate::model::vacunacion::CreateVacunacionDto {
                fecha: factory::fecha(2024, 6, 1),
                tipo: "aftosa".to_string(),
                dosis: "2ml".to_string(),
                nombre_comercial: "Bovivac".to_string(),
                veterinario: "Col. 1234".to_string(),
                id_explotacion: explotacion.id,
            })
            .await;

        assert!(result.is_err());

        let existing = vacunacion_repository
            .get_by_fecha_tipo(factory::fecha(2024, 6, 1), "aftosa", explotacion.id)
            .await?;
        assert!(existing.is_some());

        Ok(())
    }
}
