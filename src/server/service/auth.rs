use sea_orm::DatabaseConnection;

use crate::{
    model::{
        auth::LoginDto,
        usuario::{CreateUsuarioDto, UpdateUsuarioDto},
    },
    server::{
        data::usuario::UsuarioRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new usuario, storing only the bcrypt hash of the
    /// password. A duplicate email surfaces as a 400 conflict.
    pub async fn register(&self, dto: &CreateUsuarioDto) -> Result<entity::usuario::Model, Error> {
        let usuario_repository = UsuarioRepository::new(self.db);

        let contrasena_hash = bcrypt::hash(&dto.contrasena, bcrypt::DEFAULT_COST)?;

        usuario_repository
            .create(dto, contrasena_hash)
            .await
            .map_err(|err| Error::conflict_or_db(err, ValidationError::EmailEnUso))
    }

    /// Verifies credentials and returns the matching usuario.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller;
    /// both yield [`AuthError::InvalidCredentials`] (401).
    pub async fn login(&self, dto: &LoginDto) -> Result<entity::usuario::Model, Error> {
        let usuario_repository = UsuarioRepository::new(self.db);

        let usuario = match usuario_repository.get_by_email(&dto.email).await? {
            Some(usuario) => usuario,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !bcrypt::verify(&dto.contrasena, &usuario.contrasena_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(usuario)
    }

    /// Full-row usuario update; re-hashes the password only when the request
    /// carries one.
    pub async fn update_usuario(
        &self,
        usuario_id: i32,
        dto: &UpdateUsuarioDto,
    ) -> Result<Option<entity::usuario::Model>, Error> {
        let usuario_repository = UsuarioRepository::new(self.db);

        let contrasena_hash = match &dto.contrasena {
            Some(contrasena) => Some(bcrypt::hash(contrasena, bcrypt::DEFAULT_COST)?),
            None => None,
        };

        usuario_repository
            .update(usuario_id, dto, contrasena_hash)
            .await
            .map_err(|err| Error::conflict_or_db(err, ValidationError::EmailEnUso))
    }
}

#[cfg(test)]
mod tests {
    use agromano_test_utils::prelude::*;

    use crate::{
        model::{
            auth::LoginDto,
            usuario::{CreateUsuarioDto, UpdateUsuarioDto},
        },
        server::{
            error::{auth::AuthError, Error},
            service::auth::AuthService,
        },
    };

    fn register_dto(email: &str) -> CreateUsuarioDto {
        CreateUsuarioDto {
            nombre_usuario: "Ana".to_string(),
            nombre_empresa: "Ganadería Ana SL".to_string(),
            email: email.to_string(),
            contrasena: "secreta123".to_string(),
        }
    }

    #[tokio::test]
    /// Expect the stored row to carry a hash, never the plain password
    async fn test_register_hashes_password() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let auth_service = AuthService::new(&test.db);

        let usuario = auth_service
            .register(&register_dto("ana@example.com"))
            .await
            .unwrap();

        assert_ne!(usuario.contrasena_hash, "secreta123");
        assert!(bcrypt::verify("secreta123", &usuario.contrasena_hash)?);

        Ok(())
    }

    #[tokio::test]
    /// Expect a validation conflict when registering an email twice
    async fn test_register_duplicate_email_conflict() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let auth_service = AuthService::new(&test.db);

        auth_service
            .register(&register_dto("ana@example.com"))
            .await
            .unwrap();
        let result = auth_service.register(&register_dto("ana@example.com")).await;

        assert!(matches!(result, Err(Error::ValidationError(_))));

        Ok(())
    }

    #[tokio::test]
    /// Expect success when logging in with the registered credentials
    async fn test_login_success() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let auth_service = AuthService::new(&test.db);

        auth_service
            .register(&register_dto("ana@example.com"))
            .await
            .unwrap();

        let result = auth_service
            .login(&LoginDto {
                email: "ana@example.com".to_string(),
                contrasena: "secreta123".to_string(),
            })
            .await;

        assert!(result.is_ok());

        Ok(())
    }

    #[tokio::test]
    /// Expect InvalidCredentials for a wrong password
    async fn test_login_wrong_password() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let auth_service = AuthService::new(&test.db);

        auth_service
            .register(&register_dto("ana@example.com"))
            .await
            .unwrap();

        let result = auth_service
            .login(&LoginDto {
                email: "ana@example.com".to_string(),
                contrasena: "equivocada".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect InvalidCredentials for an unknown email
    async fn test_login_unknown_email() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service
            .login(&LoginDto {
                email: "nadie@example.com".to_string(),
                contrasena: "secreta123".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect the stored hash to survive an update without a password
    async fn test_update_without_password_keeps_hash() -> Result<(), TestError> {
        let test = test_setup_with_agromano_tables!()?;
        let auth_service = AuthService::new(&test.db);

        let usuario = auth_service
            .register(&register_dto("ana@example.com"))
            .await
            .unwrap();

        let updated = auth_service
            .update_usuario(
                usuario.id,
                &UpdateUsuarioDto {
                    nombre_usuario: "Ana María".to_string(),
                    nombre_empresa: "Ganadería Ana SL".to_string(),
                    email: "ana@example.com".to_string(),
                    contrasena: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.nombre_usuario, "Ana María");
        assert_eq!(updated.contrasena_hash, usuario.contrasena_hash);

        Ok(())
    }
}
