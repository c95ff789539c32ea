use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::alimentacion::CreateAlimentacionDto;

pub struct AlimentacionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlimentacionRepository<'a> {
    /// Creates a new instance of [`AlimentacionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::alimentacion::Model>, DbErr> {
        entity::prelude::Alimentacion::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        alimentacion_id: i32,
    ) -> Result<Option<entity::alimentacion::Model>, DbErr> {
        entity::prelude::Alimentacion::find_by_id(alimentacion_id)
            .one(self.db)
            .await
    }

    /// Get a feed record by its invoice within one holding
    pub async fn get_by_factura(
        &self,
        factura: &str,
        explotacion_id: i32,
    ) -> Result<Option<entity::alimentacion::Model>, DbErr> {
        entity::prelude::Alimentacion::find()
            .filter(entity::alimentacion::Column::Factura.eq(factura))
            .filter(entity::alimentacion::Column::IdExplotacion.eq(explotacion_id))
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: feed records of many holdings
    /// in one statement.
    pub async fn get_by_explotacion_ids(
        &self,
        explotacion_ids: &[i32],
    ) -> Result<Vec<entity::alimentacion::Model>, DbErr> {
        entity::prelude::Alimentacion::find()
            .filter(
                entity::alimentacion::Column::IdExplotacion.is_in(explotacion_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateAlimentacionDto,
    ) -> Result<entity::alimentacion::Model, DbErr> {
        let alimentacion = entity::alimentacion::ActiveModel {
            fecha: ActiveValue::Set(dto.fecha),
            tipo: ActiveValue::Set(dto.tipo.clone()),
            cantidad: ActiveValue::Set(dto.cantidad),
            lote: ActiveValue::Set(dto.lote.clone()),
            factura: ActiveValue::Set(dto.factura.clone()),
            id_explotacion: ActiveValue::Set(dto.id_explotacion),
            ..Default::default()
        };

        alimentacion.insert(self.db).await
    }

    pub async fn update(
        &self,
        alimentacion_id: i32,
        dto: &CreateAlimentacionDto,
    ) -> Result<Option<entity::alimentacion::Model>, DbErr> {
        let alimentacion = match entity::prelude::Alimentacion::find_by_id(alimentacion_id)
            .one(self.db)
            .await?
        {
            Some(alimentacion) => alimentacion,
            None => return Ok(None),
        };

        let mut alimentacion_am = alimentacion.into_active_model();
        alimentacion_am.fecha = ActiveValue::Set(dto.fecha);
        alimentacion_am.tipo = ActiveValue::Set(dto.tipo.clone());
        alimentacion_am.cantidad = ActiveValue::Set(dto.cantidad);
        alimentacion_am.lote = ActiveValue::Set(dto.lote.clone());
        alimentacion_am.factura = ActiveValue::Set(dto.factura.clone());
        alimentacion_am.id_explotacion = ActiveValue::Set(dto.id_explotacion);

        let alimentacion = alimentacion_am.update(self.db).await?;

        Ok(Some(alimentacion))
    }

    pub async fn delete(&self, alimentacion_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Alimentacion::delete_by_id(alimentacion_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::{
        model::alimentacion::CreateAlimentacionDto,
        server::data::alimentacion::AlimentacionRepository,
    };

    fn create_dto(factura: &str, id_explotacion: i32) -> CreateAlimentacionDto {
        CreateAlimentacionDto {
            fecha: factory::fecha(2024, 5, 20),
            tipo: "forraje".to_string(),
            cantidad: 250.0,
            lote: "L-05".to_string(),
            factura: factura.to_string(),
            id_explotacion,
        }
    }

    async fn setup_explotaciones(db: &DatabaseConnection) -> Result<(i32, i32), TestError> {
        let usuario = factory::insert_usuario(db, "dueno@example.com").await?;
        let titular = factory::insert_titular(db, "11111111A", usuario.id).await?;
        let explotacion_a = factory::insert_explotacion(db, "ES-A", titular.id).await?;
        let explotacion_b = factory::insert_explotacion(db, "ES-B", titular.id).await?;

        Ok((explotacion_a.id, explotacion_b.id))
    }

    #[tokio::test]
    /// Expect Error when reusing an invoice within the same explotación
    async fn test_create_duplicate_factura_same_explotacion() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let (explotacion_a, _) = setup_explotaciones(&test.db).await?;

        let alimentacion_repository = AlimentacionRepository::new(&test.db);
        alimentacion_repository
            .create(&create_dto("F-100", explotacion_a))
            .await?;
        let result = alimentacion_repository
            .create(&create_dto("F-100", explotacion_a))
            .await;

        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    /// Expect success when the same invoice is registered under a different
    /// explotación: only the (factura, explotación) pair is unique
    async fn test_create_same_factura_other_explotacion() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let (explotacion_a, explotacion_b) = setup_explotaciones(&test.db).await?;

        let alimentacion_repository = AlimentacionRepository::new(&test.db);
        alimentacion_repository
            .create(&create_dto("F-100", explotacion_a))
            .await?;
        let result = alimentacion_repository
            .create(&create_dto("F-100", explotacion_b))
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    #[tokio::test]
    /// Expect Some when looking up a stored invoice within its explotación
    async fn test_get_by_factura_some() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let (explotacion_a, explotacion_b) = setup_explotaciones(&test.db).await?;
        factory::insert_alimentacion(&test.db, "F-100", explotacion_a, factory::fecha(2024, 5, 20))
            .await?;

        let alimentacion_repository = AlimentacionRepository::new(&test.db);

        let found = alimentacion_repository
            .get_by_factura("F-100", explotacion_a)
            .await?;
        assert!(found.is_some());

        let not_found = alimentacion_repository
            .get_by_factura("F-100", explotacion_b)
            .await?;
        assert!(not_found.is_none());

        Ok(())
    }
}
