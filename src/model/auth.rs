use serde::{Deserialize, Serialize};

use crate::model::usuario::UsuarioDto;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub contrasena: String,
}

/// Response of `GET /api/check-auth`; never an error, `usuario` is None
/// when no session is active.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthStatusDto {
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    pub usuario: Option<UsuarioDto>,
}
