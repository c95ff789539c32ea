use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::explotacion::CreateExplotacionDto;

pub struct ExplotacionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExplotacionRepository<'a> {
    /// Creates a new instance of [`ExplotacionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::explotacion::Model>, DbErr> {
        entity::prelude::Explotacion::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        explotacion_id: i32,
    ) -> Result<Option<entity::explotacion::Model>, DbErr> {
        entity::prelude::Explotacion::find_by_id(explotacion_id)
            .one(self.db)
            .await
    }

    /// Gets all explotaciones belonging to the provided titular
    pub async fn get_by_titular_id(
        &self,
        titular_id: i32,
    ) -> Result<Vec<entity::explotacion::Model>, DbErr> {
        entity::prelude::Explotacion::find()
            .filter(entity::explotacion::Column::IdTitular.eq(titular_id))
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateExplotacionDto,
    ) -> Result<entity::explotacion::Model, DbErr> {
        let explotacion = entity::explotacion::ActiveModel {
            codigo: ActiveValue::Set(dto.codigo.clone()),
            nombre: ActiveValue::Set(dto.nombre.clone()),
            direccion: ActiveValue::Set(dto.direccion.clone()),
            localidad: ActiveValue::Set(dto.localidad.clone()),
            provincia: ActiveValue::Set(dto.provincia.clone()),
            codigo_postal: ActiveValue::Set(dto.codigo_postal.clone()),
            especies: ActiveValue::Set(dto.especies.clone()),
            coordenadas: ActiveValue::Set(dto.coordenadas.clone()),
            id_titular: ActiveValue::Set(dto.id_titular),
            ..Default::default()
        };

        explotacion.insert(self.db).await
    }

    pub async fn update(
        &self,
        explotacion_id: i32,
        dto: &CreateExplotacionDto,
    ) -> Result<Option<entity::explotacion::Model>, DbErr> {
        let explotacion = match entity::prelude::Explotacion::find_by_id(explotacion_id)
            .one(self.db)
            .await?
        {
            Some(explotacion) => explotacion,
            None => return Ok(None),
        };

        let mut explotacion_am = explotacion.into_active_model();
        explotacion_am.codigo = ActiveValue::Set(dto.codigo.clone());
        explotacion_am.nombre = ActiveValue::Set(dto.nombre.clone());
        explotacion_am.direccion = ActiveValue::Set(dto.direccion.clone());
        explotacion_am.localidad = ActiveValue::Set(dto.localidad.clone());
        explotacion_am.provincia = ActiveValue::Set(dto.provincia.clone());
        explotacion_am.codigo_postal = ActiveValue::Set(dto.codigo_postal.clone());
        explotacion_am.especies = ActiveValue::Set(dto.especies.clone());
        explotacion_am.coordenadas = ActiveValue::Set(dto.coordenadas.clone());
        explotacion_am.id_titular = ActiveValue::Set(dto.id_titular);

        let explotacion = explotacion_am.update(self.db).await?;

        Ok(Some(explotacion))
    }

    pub async fn delete(&self, explotacion_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Explotacion::delete_by_id(explotacion_id)
            .exec(self.db)
            .await
    }
}
