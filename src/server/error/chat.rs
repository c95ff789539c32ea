use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("Completion response contained no candidates")]
    EmptyResponse,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        tracing::error!("Chatbot request failed: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Error al generar la respuesta del chatbot".to_string(),
            }),
        )
            .into_response()
    }
}
