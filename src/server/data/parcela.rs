use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::parcela::CreateParcelaDto;

pub struct ParcelaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParcelaRepository<'a> {
    /// Creates a new instance of [`ParcelaRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::parcela::Model>, DbErr> {
        entity::prelude::Parcela::find().all(self.db).await
    }

    pub async fn get_by_id(&self, parcela_id: i32) -> Result<Option<entity::parcela::Model>, DbErr> {
        entity::prelude::Parcela::find_by_id(parcela_id)
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: parcelas of many holdings in
    /// one statement.
    pub async fn get_by_explotacion_ids(
        &self,
        explotacion_ids: &[i32],
    ) -> Result<Vec<entity::parcela::Model>, DbErr> {
        entity::prelude::Parcela::find()
            .filter(entity::parcela::Column::IdExplotacion.is_in(explotacion_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn create(&self, dto: &CreateParcelaDto) -> Result<entity::parcela::Model, DbErr> {
        let parcela = entity::parcela::ActiveModel {
            coordenadas: ActiveValue::Set(dto.coordenadas.clone()),
            extension: ActiveValue::Set(dto.extension),
            id_explotacion: ActiveValue::Set(dto.id_explotacion),
            ..Default::default()
        };

        parcela.insert(self.db).await
    }

    pub async fn update(
        &self,
        parcela_id: i32,
        dto: &CreateParcelaDto,
    ) -> Result<Option<entity::parcela::Model>, DbErr> {
        let parcela = match entity::prelude::Parcela::find_by_id(parcela_id)
            .one(self.db)
            .await?
        {
            Some(parcela) => parcela,
            None => return Ok(None),
        };

        let mut parcela_am = parcela.into_active_model();
        parcela_am.coordenadas = ActiveValue::Set(dto.coordenadas.clone());
        parcela_am.extension = ActiveValue::Set(dto.extension);
        parcela_am.id_explotacion = ActiveValue::Set(dto.id_explotacion);

        let parcela = parcela_am.update(self.db).await?;

        Ok(Some(parcela))
    }

    pub async fn delete(&self, parcela_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Parcela::delete_by_id(parcela_id)
            .exec(self.db)
            .await
    }
}
