use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::titular::CreateTitularDto;

pub struct TitularRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TitularRepository<'a> {
    /// Creates a new instance of [`TitularRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::titular::Model>, DbErr> {
        entity::prelude::Titular::find().all(self.db).await
    }

    /// Gets all titulares owned by the provided usuario
    pub async fn get_by_usuario_id(
        &self,
        usuario_id: i32,
    ) -> Result<Vec<entity::titular::Model>, DbErr> {
        entity::prelude::Titular::find()
            .filter(entity::titular::Column::IdUsuario.eq(usuario_id))
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, titular_id: i32) -> Result<Option<entity::titular::Model>, DbErr> {
        entity::prelude::Titular::find_by_id(titular_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_nif(&self, nif: &str) -> Result<Option<entity::titular::Model>, DbErr> {
        entity::prelude::Titular::find()
            .filter(entity::titular::Column::Nif.eq(nif))
            .one(self.db)
            .await
    }

    /// Gets the usuario that owns the provided titular, used to walk the
    /// ownership chain titular → usuario.
    pub async fn get_usuario_by_titular_id(
        &self,
        titular_id: i32,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        let titular_with_usuario = entity::prelude::Titular::find_by_id(titular_id)
            .find_also_related(entity::usuario::Entity)
            .one(self.db)
            .await?;

        Ok(titular_with_usuario.and_then(|(_, usuario)| usuario))
    }

    pub async fn create(&self, dto: &CreateTitularDto) -> Result<entity::titular::Model, DbErr> {
        let titular = entity::titular::ActiveModel {
            nombre: ActiveValue::Set(dto.nombre.clone()),
            nif: ActiveValue::Set(dto.nif.clone()),
            domicilio: ActiveValue::Set(dto.domicilio.clone()),
            localidad: ActiveValue::Set(dto.localidad.clone()),
            provincia: ActiveValue::Set(dto.provincia.clone()),
            codigo_postal: ActiveValue::Set(dto.codigo_postal.clone()),
            telefono: ActiveValue::Set(dto.telefono.clone()),
            id_usuario: ActiveValue::Set(dto.id_usuario),
            ..Default::default()
        };

        titular.insert(self.db).await
    }

    pub async fn update(
        &self,
        titular_id: i32,
        dto: &CreateTitularDto,
    ) -> Result<Option<entity::titular::Model>, DbErr> {
        let titular = match entity::prelude::Titular::find_by_id(titular_id)
            .one(self.db)
            .await?
        {
            Some(titular) => titular,
            None => return Ok(None),
        };

        let mut titular_am = titular.into_active_model();
        titular_am.nombre = ActiveValue::Set(dto.nombre.clone());
        titular_am.nif = ActiveValue::Set(dto.nif.clone());
        titular_am.domicilio = ActiveValue::Set(dto.domicilio.clone());
        titular_am.localidad = ActiveValue::Set(dto.localidad.clone());
        titular_am.provincia = ActiveValue::Set(dto.provincia.clone());
        titular_am.codigo_postal = ActiveValue::Set(dto.codigo_postal.clone());
        titular_am.telefono = ActiveValue::Set(dto.telefono.clone());
        titular_am.id_usuario = ActiveValue::Set(dto.id_usuario);

        let titular = titular_am.update(self.db).await?;

        Ok(Some(titular))
    }

    /// Deletes a titular.
    ///
    /// Children (explotaciones and below) are not touched; orphaning is the
    /// schema's concern, not the application's.
    pub async fn delete(&self, titular_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Titular::delete_by_id(titular_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;
    use sea_orm::DatabaseConnection;

    use crate::{model::titular::CreateTitularDto, server::data::titular::TitularRepository};

    fn create_dto(nif: &str, id_usuario: i32) -> CreateTitularDto {
        CreateTitularDto {
            nombre: "Juan Pérez".to_string(),
            nif: nif.to_string(),
            domicilio: "Calle Larga 3".to_string(),
            localidad: "Benavente".to_string(),
            provincia: "Zamora".to_string(),
            codigo_postal: "49600".to_string(),
            telefono: "600111222".to_string(),
            id_usuario,
        }
    }

    async fn setup_usuario(db: &DatabaseConnection) -> Result<i32, TestError> {
        let usuario = factory::insert_usuario(db, "juan@example.com").await?;

        Ok(usuario.id)
    }

    #[tokio::test]
    /// Expect success when creating a titular with an unused NIF
    async fn test_create_titular_success() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario_id = setup_usuario(&test.db).await?;

        let titular_repository = TitularRepository::new(&test.db);
        let result = titular_repository
            .create(&create_dto("12345678Z", usuario_id))
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    #[tokio::test]
    /// Expect Error when creating a titular with a NIF already stored
    async fn test_create_titular_duplicate_nif() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario_id = setup_usuario(&test.db).await?;

        let titular_repository = TitularRepository::new(&test.db);
        titular_repository
            .create(&create_dto("12345678Z", usuario_id))
            .await?;
        let result = titular_repository
            .create(&create_dto("12345678Z", usuario_id))
            .await;

        assert!(result.is_err());

        // The original row is still the only one behind that NIF
        let existing = titular_repository.get_by_nif("12345678Z").await?;
        assert!(existing.is_some());

        Ok(())
    }

    #[tokio::test]
    /// Expect only the matching usuario's titulares to be returned
    async fn test_get_by_usuario_id_filters() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "a@example.com").await?;
        let otro = factory::insert_usuario(&test.db, "b@example.com").await?;
        factory::insert_titular(&test.db, "11111111A", usuario.id).await?;
        factory::insert_titular(&test.db, "22222222B", otro.id).await?;

        let titular_repository = TitularRepository::new(&test.db);
        let titulares = titular_repository.get_by_usuario_id(usuario.id).await?;

        assert_eq!(titulares.len(), 1);
        assert_eq!(titulares[0].nif, "11111111A");

        Ok(())
    }

    #[tokio::test]
    /// Expect the owning usuario when walking up from a titular
    async fn test_get_usuario_by_titular_id() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "a@example.com").await?;
        let titular = factory::insert_titular(&test.db, "11111111A", usuario.id).await?;

        let titular_repository = TitularRepository::new(&test.db);
        let found = titular_repository
            .get_usuario_by_titular_id(titular.id)
            .await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, usuario.id);

        Ok(())
    }
}
