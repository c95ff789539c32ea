use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::inspeccion::CreateInspeccionDto;

pub struct InspeccionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InspeccionRepository<'a> {
    /// Creates a new instance of [`InspeccionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::inspeccion::Model>, DbErr> {
        entity::prelude::Inspeccion::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        inspeccion_id: i32,
    ) -> Result<Option<entity::inspeccion::Model>, DbErr> {
        entity::prelude::Inspeccion::find_by_id(inspeccion_id)
            .one(self.db)
            .await
    }

    /// Get an inspection by its report number within one holding
    pub async fn get_by_acta(
        &self,
        numero_acta: &str,
        explotacion_id: i32,
    ) -> Result<Option<entity::inspeccion::Model>, DbErr> {
        entity::prelude::Inspeccion::find()
            .filter(entity::inspeccion::Column::NumeroActa.eq(numero_acta))
            .filter(entity::inspeccion::Column::IdExplotacion.eq(explotacion_id))
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: inspections of many holdings
    /// in one statement.
    pub async fn get_by_explotacion_ids(
        &self,
        explotacion_ids: &[i32],
    ) -> Result<Vec<entity::inspeccion::Model>, DbErr> {
        entity::prelude::Inspeccion::find()
            .filter(entity::inspeccion::Column::IdExplotacion.is_in(explotacion_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateInspeccionDto,
    ) -> Result<entity::inspeccion::Model, DbErr> {
        let inspeccion = entity::inspeccion::ActiveModel {
            fecha: ActiveValue::Set(dto.fecha),
            oficial: ActiveValue::Set(dto.oficial),
            tipo: ActiveValue::Set(dto.tipo.clone()),
            numero_acta: ActiveValue::Set(dto.numero_acta.clone()),
            id_explotacion: ActiveValue::Set(dto.id_explotacion),
            ..Default::default()
        };

        inspeccion.insert(self.db).await
    }

    pub async fn update(
        &self,
        inspeccion_id: i32,
        dto: &CreateInspeccionDto,
    ) -> Result<Option<entity::inspeccion::Model>, DbErr> {
        let inspeccion = match entity::prelude::Inspeccion::find_by_id(inspeccion_id)
            .one(self.db)
            .await?
        {
            Some(inspeccion) => inspeccion,
            None => return Ok(None),
        };

        let mut inspeccion_am = inspeccion.into_active_model();
        inspeccion_am.fecha = ActiveValue::Set(dto.fecha);
        inspeccion_am.oficial = ActiveValue::Set(dto.oficial);
        inspeccion_am.tipo = ActiveValue::Set(dto.tipo.clone());
        inspeccion_am.numero_acta = ActiveValue::Set(dto.numero_acta.clone());
        inspeccion_am.id_explotacion = ActiveValue::Set(dto.id_explotacion);

        let inspeccion = inspeccion_am.update(self.db).await?;

        Ok(Some(inspeccion))
    }

    pub async fn delete(&self, inspeccion_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Inspeccion::delete_by_id(inspeccion_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;

    use crate::{
        model::inspeccion::CreateInspeccionDto, server::data::inspeccion::InspeccionRepository,
    };

    #[tokio::test]
    /// Expect Error when repeating an acta number within an explotación but
    /// success under a different one
    async fn test_acta_unique_per_explotacion() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "dueno@example.com").await?;
        let titular = factory::insert_titular(&test.db, "11111111A", usuario.id).await?;
        let explotacion_a = factory::insert_explotacion(&test.db, "ES-A", titular.id).await?;
        let explotacion_b = factory::insert_explotacion(&test.db, "ES-B", titular.id).await?;

        let inspeccion_repository = InspeccionRepository::new(&test.db);
        let dto = |id_explotacion| CreateInspeccionDto {
            fecha: factory::fecha(2024, 9, 12),
            oficial: true,
            tipo: "sanitaria".to_string(),
            numero_acta: "ACTA-7".to_string(),
            id_explotacion,
        };

        inspeccion_repository.create(&dto(explotacion_a.id)).await?;

        let duplicate = inspeccion_repository.create(&dto(explotacion_a.id)).await;
        assert!(duplicate.is_err());

        let other = inspeccion_repository.create(&dto(explotacion_b.id)).await;
        assert!(other.is_ok());

        Ok(())
    }
}
