use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::medicamento::CreateMedicamentoDto;

pub struct MedicamentoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicamentoRepository<'a> {
    /// Creates a new instance of [`MedicamentoRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::medicamento::Model>, DbErr> {
        entity::prelude::Medicamento::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        medicamento_id: i32,
    ) -> Result<Option<entity::medicamento::Model>, DbErr> {
        entity::prelude::Medicamento::find_by_id(medicamento_id)
            .one(self.db)
            .await
    }

    /// Get a medication record by its invoice within one holding
    pub async fn get_by_factura(
        &self,
        factura: &str,
        explotacion_id: i32,
    ) -> Result<Option<entity::medicamento::Model>, DbErr> {
        entity::prelude::Medicamento::find()
            .filter(entity::medicamento::Column::Factura.eq(factura))
            .filter(entity::medicamento::Column::IdExplotacion.eq(explotacion_id))
            .one(self.db)
            .await
    }

    /// Batch load for the report aggregator: medication records of many
    /// holdings in one statement.
    pub async fn get_by_explotacion_ids(
        &self,
        explotacion_ids: &[i32],
    ) -> Result<Vec<entity::medicamento::Model>, DbErr> {
        entity::prelude::Medicamento::find()
            .filter(
                entity::medicamento::Column::IdExplotacion.is_in(explotacion_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreateMedicamentoDto,
    ) -> Result<entity::medicamento::Model, DbErr> {
        let medicamento = entity::medicamento::ActiveModel {
            fecha: ActiveValue::Set(dto.fecha),
            receta: ActiveValue::Set(dto.receta.clone()),
            medicamento: ActiveValue::Set(dto.medicamento.clone()),
            factura: ActiveValue::Set(dto.factura.clone()),
            id_explotacion: ActiveValue::Set(dto.id_explotacion),
            ..Default::default()
        };

        medicamento.insert(self.db).await
    }

    pub async fn update(
        &self,
        medicamento_id: i32,
        dto: &CreateMedicamentoDto,
    ) -> Result<Option<entity::medicamento::Model>, DbErr> {
        let medicamento = match entity::prelude::Medicamento::find_by_id(medicamento_id)
            .one(self.db)
            .await?
        {
            Some(medicamento) => medicamento,
            None => return Ok(None),
        };

        let mut medicamento_am = medicamento.into_active_model();
        medicamento_am.fecha = ActiveValue::Set(dto.fecha);
        medicamento_am.receta = ActiveValue::Set(dto.receta.clone());
        medicamento_am.medicamento = ActiveValue::Set(dto.medicamento.clone());
        medicamento_am.factura = ActiveValue::Set(dto.factura.clone());
        medicamento_am.id_explotacion = ActiveValue::Set(dto.id_explotacion);

        let medicamento = medicamento_am.update(self.db).await?;

        Ok(Some(medicamento))
    }

    pub async fn delete(&self, medicamento_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Medicamento::delete_by_id(medicamento_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;

    use crate::server::data::medicamento::MedicamentoRepository;

    #[tokio::test]
    /// Expect the factura lookup to be scoped to one explotación
    async fn test_get_by_factura_scoped() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "dueno@example.com").await?;
        let titular = factory::insert_titular(&test.db, "11111111A", usuario.id).await?;
        let explotacion_a = factory::insert_explotacion(&test.db, "ES-A", titular.id).await?;
        let explotacion_b = factory::insert_explotacion(&test.db, "ES-B", titular.id).await?;
        factory::insert_medicamento(&test.db, "F-200", explotacion_a.id, factory::fecha(2024, 6, 10))
            .await?;

        let medicamento_repository = MedicamentoRepository::new(&test.db);

        let found = medicamento_repository
            .get_by_factura("F-200", explotacion_a.id)
            .await?;
        assert!(found.is_some());

        let not_found = medicamento_repository
            .get_by_factura("F-200", explotacion_b.id)
            .await?;
        assert!(not_found.is_none());

        Ok(())
    }
}
