use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::movimiento::CreateMovimientoDto;

pub struct MovimientoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovimientoRepository<'a> {
    /// Creates a new instance of [`MovimientoRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::movimiento::Model>, DbErr> {
        entity::prelude::Movimiento::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        movimiento_id: i32,
    ) -> Result<Option<entity::movimiento::Model>, DbErr> {
        entity::prelude::Movimiento::find_by_id(movimiento_id)
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: movements of many animals in
    /// one statement.
    pub async fn get_by_animal_ids(
        &self,
        animal_ids: &[i32],
    ) -> Result<Vec<entity::movimiento::Model>, DbErr> {
        entity::prelude::Movimiento::find()
            .filter(entity::movimiento::Column::IdAnimal.is_in(animal_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateMovimientoDto,
    ) -> Result<entity::movimiento::Model, DbErr> {
        let movimiento = entity::movimiento::ActiveModel {
            tipo: ActiveValue::Set(dto.tipo.clone()),
            fecha: ActiveValue::Set(dto.fecha),
            motivo: ActiveValue::Set(dto.motivo.clone()),
            procedencia_destino: ActiveValue::Set(dto.procedencia_destino.clone()),
            id_animal: ActiveValue::Set(dto.id_animal),
            ..Default::default()
        };

        movimiento.insert(self.db).await
    }

    pub async fn update(
        &self,
        movimiento_id: i32,
        dto: &CreateMovimientoDto,
    ) -> Result<Option<entity::movimiento::Model>, DbErr> {
        let movimiento = match entity::prelude::Movimiento::find_by_id(movimiento_id)
            .one(self.db)
            .await?
        {
            Some(movimiento) => movimiento,
            None => return Ok(None),
        };

        let mut movimiento_am = movimiento.into_active_model();
        movimiento_am.tipo = ActiveValue::Set(dto.tipo.clone());
        movimiento_am.fecha = ActiveValue::Set(dto.fecha);
        movimiento_am.motivo = ActiveValue::Set(dto.motivo.clone());
        movimiento_am.procedencia_destino = ActiveValue::Set(dto.procedencia_destino.clone());
        movimiento_am.id_animal = ActiveValue::Set(dto.id_animal);

        let movimiento = movimiento_am.update(self.db).await?;

        Ok(Some(movimiento))
    }

    pub async fn delete(&self, movimiento_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Movimiento::delete_by_id(movimiento_id)
            .exec(self.db)
            .await
    }
}
