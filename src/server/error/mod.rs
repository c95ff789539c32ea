//! Error types for the Agromano server application.
//!
//! A root [`Error`] enum aggregates the domain-specific error types
//! (authentication, validation conflicts, configuration, chatbot proxy) and
//! external library errors. All domain enums implement `IntoResponse`; the
//! rest fall through to a generic, logged 500.

pub mod auth;
pub mod chat;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, chat::ChatError, config::ConfigError, validation::ValidationError,
    },
};

/// Main error type for the Agromano server application.
///
/// Uses `thiserror`'s `#[from]` attribute so underlying errors convert via
/// the `?` operator. The `IntoResponse` implementation maps errors to the
/// HTTP responses API consumers see.
///
/// # Error Categories
/// - Validation conflicts (duplicate NIF, email, identificación, factura,
///   acta, vacunación) → 400 with a human-readable message
/// - Authentication errors (bad credentials, missing session) → 401
/// - Configuration errors (missing/invalid environment variables) → 500
/// - Chatbot proxy errors (upstream request or response shape) → 500
/// - Database, session, and PDF build errors → 500 (logged, generic body)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, session state).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Uniqueness conflict surfaced to the client as a 400.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Chatbot proxy error (upstream request, response decoding).
    #[error(transparent)]
    ChatError(#[from] ChatError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing/verification error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// PDF document build error.
    #[error(transparent)]
    PdfError(#[from] printpdf::Error),
}

impl Error {
    /// Translate a unique-constraint violation into the given 400 conflict.
    ///
    /// Uniqueness is enforced by database constraints rather than pre-insert
    /// lookups; any other database error is left for the 500 fallback.
    pub fn conflict_or_db(err: sea_orm::DbErr, conflict: ValidationError) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::ValidationError(conflict),
            _ => Self::DbErr(err),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ChatError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic body to
/// the client so implementation details are not exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
