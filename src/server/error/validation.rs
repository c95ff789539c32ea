use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

/// Uniqueness conflicts, surfaced as 400 with the message the frontend
/// shows verbatim to the user.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("El correo electrónico ya está en uso")]
    EmailEnUso,
    #[error("El NIF ya está en uso")]
    NifEnUso,
    #[error(
        "El número de identificación ya está en uso, no se pueden duplicar números de identificación"
    )]
    IdentificacionEnUso,
    #[error("La factura ya está en uso, no se pueden duplicar facturas")]
    FacturaEnUso,
    #[error(
        "El tipo de vacuna ya existe para esa fecha. Accede a los animales afectados si quieres añadir animales a la vacuna."
    )]
    VacunacionDuplicada,
    #[error("El número de acta ya está registrado para esta explotación.")]
    ActaEnUso,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(MessageDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
