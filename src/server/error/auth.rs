use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login rejected due to unknown email or wrong password")]
    InvalidCredentials,
    #[error("Usuario ID is not present in session")]
    UsuarioNotInSession,
    #[error("Usuario ID {0:?} not found in database despite having an active session")]
    UsuarioNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(MessageDto {
                    message: "Email o contraseña incorrectos".to_string(),
                }),
            )
                .into_response(),
            Self::UsuarioNotInSession | Self::UsuarioNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(MessageDto {
                    message: "No hay ninguna sesión activa".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
