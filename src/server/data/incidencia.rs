use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::incidencia::CreateIncidenciaDto;

pub struct IncidenciaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IncidenciaRepository<'a> {
    /// Creates a new instance of [`IncidenciaRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::incidencia::Model>, DbErr> {
        entity::prelude::Incidencia::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        incidencia_id: i32,
    ) -> Result<Option<entity::incidencia::Model>, DbErr> {
        entity::prelude::Incidencia::find_by_id(incidencia_id)
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: incidents of many animals in
    /// one statement.
    pub async fn get_by_animal_ids(
        &self,
        animal_ids: &[i32],
    ) -> Result<Vec<entity::incidencia::Model>, DbErr> {
        entity::prelude::Incidencia::find()
            .filter(entity::incidencia::Column::IdAnimal.is_in(animal_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateIncidenciaDto,
    ) -> Result<entity::incidencia::Model, DbErr> {
        let incidencia = entity::incidencia::ActiveModel {
            fecha: ActiveValue::Set(dto.fecha),
            descripcion: ActiveValue::Set(dto.descripcion.clone()),
            codigo_anterior: ActiveValue::Set(dto.codigo_anterior.clone()),
            codigo_actual: ActiveValue::Set(dto.codigo_actual.clone()),
            id_animal: ActiveValue::Set(dto.id_animal),
            ..Default::default()
        };

        incidencia.insert(self.db).await
    }

    pub async fn update(
        &self,
        incidencia_id: i32,
        dto: &CreateIncidenciaDto,
    ) -> Result<Option<entity::incidencia::Model>, DbErr> {
        let incidencia = match entity::prelude::Incidencia::find_by_id(incidencia_id)
            .one(self.db)
            .await?
        {
            Some(incidencia) => incidencia,
            None => return Ok(None),
        };

        let mut incidencia_am = incidencia.into_active_model();
        incidencia_am.fecha = ActiveValue::Set(dto.fecha);
        incidencia_am.descripcion = ActiveValue::Set(dto.descripcion.clone());
        incidencia_am.codigo_anterior = ActiveValue::Set(dto.codigo_anterior.clone());
        incidencia_am.codigo_actual = ActiveValue::Set(dto.codigo_actual.clone());
        incidencia_am.id_animal = ActiveValue::Set(dto.id_animal);

        let incidencia = incidencia_am.update(self.db).await?;

        Ok(Some(incidencia))
    }

    pub async fn delete(&self, incidencia_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Incidencia::delete_by_id(incidencia_id)
            .exec(self.db)
            .await
    }
}
