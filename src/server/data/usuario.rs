use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::usuario::{CreateUsuarioDto, UpdateUsuarioDto};

pub struct UsuarioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioRepository<'a> {
    /// Creates a new instance of [`UsuarioRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find().all(self.db).await
    }

    pub async fn get_by_id(&self, usuario_id: i32) -> Result<Option<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find_by_id(usuario_id)
            .one(self.db)
            .await
    }

    /// Get a usuario by their login email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::usuario::Model>, DbErr> {
        entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Creates a new usuario; the caller provides the already-hashed password
    pub async fn create(
        &self,
        dto: &CreateUsuarioDto,
        contrasena_hash: String,
    ) -> Result<entity::usuario::Model, DbErr> {
        let usuario = entity::usuario::ActiveModel {
            nombre_usuario: ActiveValue::Set(dto.nombre_usuario.clone()),
            nombre_empresa: ActiveValue::Set(dto.nombre_empresa.clone()),
            email: ActiveValue::Set(dto.email.clone()),
            contrasena_hash: ActiveValue::Set(contrasena_hash),
            ..Default::default()
        };

        usuario.insert(self.db).await
    }

    /// Full-row update. The stored password hash is only replaced when a new
    /// hash is provided.
    pub async fn update(
        &self,
        usuario_id: i32,
        dto: &UpdateUsuarioDto,
        contrasena_hash: Option<String>,
    ) -> Result<Option<entity::usuario::Model>, DbErr> {
        let usuario = match entity::prelude::Usuario::find_by_id(usuario_id)
            .one(self.db)
            .await?
        {
            Some(usuario) => usuario,
            None => return Ok(None),
        };

        let mut usuario_am = usuario.into_active_model();
        usuario_am.nombre_usuario = ActiveValue::Set(dto.nombre_usuario.clone());
        usuario_am.nombre_empresa = ActiveValue::Set(dto.nombre_empresa.clone());
        usuario_am.email = ActiveValue::Set(dto.email.clone());
        if let Some(hash) = contrasena_hash {
            usuario_am.contrasena_hash = ActiveValue::Set(hash);
        }

        let usuario = usuario_am.update(self.db).await?;

        Ok(Some(usuario))
    }

    /// Deletes a usuario
    ///
    /// Returns OK regardless of the usuario existing; to confirm the result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, usuario_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Usuario::delete_by_id(usuario_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;

    use crate::{
        model::usuario::CreateUsuarioDto,
        server::data::usuario::UsuarioRepository,
    };

    fn create_dto(email: &str) -> CreateUsuarioDto {
        CreateUsuarioDto {
            nombre_usuario: "Ana".to_string(),
            nombre_empresa: "Ganadería Ana SL".to_string(),
            email: email.to_string(),
            contrasena: "secreta".to_string(),
        }
    }

    #[tokio::test]
    /// Expect success when creating a new usuario
    async fn test_create_usuario_success() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario_repository = UsuarioRepository::new(&test.db);

        let result = usuario_repository
            .create(&create_dto("ana@example.com"), "hash".to_string())
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    #[tokio::test]
    /// Expect Error when creating a usuario with an email already stored
    async fn test_create_usuario_duplicate_email() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario_repository = UsuarioRepository::new(&test.db);

        usuario_repository
            .create(&create_dto("ana@example.com"), "hash".to_string())
            .await?;
        let result = usuario_repository
            .create(&create_dto("ana@example.com"), "hash".to_string())
            .await;

        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    /// Expect Some when looking up a stored usuario by email
    async fn test_get_by_email_some() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "ana@example.com").await?;

        let usuario_repository = UsuarioRepository::new(&test.db);
        let found = usuario_repository.get_by_email("ana@example.com").await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, usuario.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect no rows affected when deleting a usuario that does not exist
    async fn test_delete_usuario_none() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let usuario = factory::insert_usuario(&test.db, "ana@example.com").await?;

        let usuario_repository = UsuarioRepository::new(&test.db);
        let result = usuario_repository.delete(usuario.id + 1).await?;

        assert_eq!(result.rows_affected, 0);

        Ok(())
    }
}
