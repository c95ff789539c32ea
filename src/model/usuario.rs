use serde::{Deserialize, Serialize};

/// Usuario as exposed by the API. The stored password hash never leaves the
/// server.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsuarioDto {
    pub id: i32,
    pub nombre_usuario: String,
    pub nombre_empresa: String,
    pub email: String,
}

impl From<entity::usuario::Model> for UsuarioDto {
    fn from(model: entity::usuario::Model) -> Self {
        Self {
            id: model.id,
            nombre_usuario: model.nombre_usuario,
            nombre_empresa: model.nombre_empresa,
            email: model.email,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUsuarioDto {
    pub nombre_usuario: String,
    pub nombre_empresa: String,
    pub email: String,
    pub contrasena: String,
}

/// Full-row usuario update; the password only changes when one is provided.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUsuarioDto {
    pub nombre_usuario: String,
    pub nombre_empresa: String,
    pub email: String,
    pub contrasena: Option<String>,
}
