use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alimentacion::{AlimentacionDto, CreateAlimentacionDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        data::alimentacion::AlimentacionRepository,
        error::{validation::ValidationError, Error},
        model::app::AppState,
    },
};

pub static ALIMENTACION_TAG: &str = "alimentaciones";

/// Get all alimentaciones
#[utoipa::path(
    get,
    path = "/api/alimentaciones",
    tag = ALIMENTACION_TAG,
    responses(
        (status = 200, description = "Success when retrieving alimentaciones", body = Vec<AlimentacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alimentaciones(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let alimentacion_repository = AlimentacionRepository::new(&state.db);

    let alimentaciones = alimentacion_repository.get_all().await?;
    let dtos: Vec<AlimentacionDto> = alimentaciones
        .into_iter()
        .map(AlimentacionDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an alimentación by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/alimentaciones/{id}",
    tag = ALIMENTACION_TAG,
    responses(
        (status = 200, description = "The alimentación, or null", body = Option<AlimentacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alimentacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let alimentacion_repository = AlimentacionRepository::new(&state.db);

    let alimentacion = alimentacion_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(alimentacion.map(AlimentacionDto::from))))
}

/// Create an alimentación; reusing an invoice within the same explotación
/// yields a 400
#[utoipa::path(
    post,
    path = "/api/alimentaciones",
    tag = ALIMENTACION_TAG,
    responses(
        (status = 201, description = "Alimentación created", body = AlimentacionDto),
        (status = 400, description = "Invoice already in use for this explotación", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_alimentacion(
    State(state): State<AppState>,
    Json(dto): Json<CreateAlimentacionDto>,
) -> Result<impl IntoResponse, Error> {
    let alimentacion_repository = AlimentacionRepository::new(&state.db);

    let alimentacion = alimentacion_repository
        .create(&dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::FacturaEnUso))?;

    Ok((StatusCode::CREATED, Json(AlimentacionDto::from(alimentacion))))
}

/// Update an alimentación (full row)
#[utoipa::path(
    put,
    path = "/api/alimentaciones/{id}",
    tag = ALIMENTACION_TAG,
    responses(
        (status = 200, description = "The updated alimentación, or null", body = Option<AlimentacionDto>),
        (status = 400, description = "Invoice already in use for this explotación", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_alimentacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateAlimentacionDto>,
) -> Result<impl IntoResponse, Error> {
    let alimentacion_repository = AlimentacionRepository::new(&state.db);

    let alimentacion = alimentacion_repository
        .update(id, &dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::FacturaEnUso))?;

    Ok((StatusCode::OK, Json(alimentacion.map(AlimentacionDto::from))))
}

/// Delete an alimentación
#[utoipa::path(
    delete,
    path = "/api/alimentaciones/{id}",
    tag = ALIMENTACION_TAG,
    responses(
        (status = 204, description = "Alimentación deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_alimentacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let alimentacion_repository = AlimentacionRepository::new(&state.db);

    alimentacion_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
