use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        explotacion::{CreateExplotacionDto, ExplotacionDto},
    },
    server::{data::explotacion::ExplotacionRepository, error::Error, model::app::AppState},
};

pub static EXPLOTACION_TAG: &str = "explotaciones";

/// Get all explotaciones
#[utoipa::path(
    get,
    path = "/api/explotaciones",
    tag = EXPLOTACION_TAG,
    responses(
        (status = 200, description = "Success when retrieving explotaciones", body = Vec<ExplotacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_explotaciones(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let explotacion_repository = ExplotacionRepository::new(&state.db);

    let explotaciones = explotacion_repository.get_all().await?;
    let dtos: Vec<ExplotacionDto> = explotaciones
        .into_iter()
        .map(ExplotacionDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an explotación by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/explotaciones/{id}",
    tag = EXPLOTACION_TAG,
    responses(
        (status = 200, description = "The explotación, or null", body = Option<ExplotacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_explotacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let explotacion_repository = ExplotacionRepository::new(&state.db);

    let explotacion = explotacion_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(explotacion.map(ExplotacionDto::from))))
}

/// Create an explotación
#[utoipa::path(
    post,
    path = "/api/explotaciones",
    tag = EXPLOTACION_TAG,
    responses(
        (status = 201, description = "Explotación created", body = ExplotacionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_explotacion(
    State(state): State<AppState>,
    Json(dto): Json<CreateExplotacionDto>,
) -> Result<impl IntoResponse, Error> {
    let explotacion_repository = ExplotacionRepository::new(&state.db);

    let explotacion = explotacion_repository.create(&dto).await?;

    Ok((StatusCode::CREATED, Json(ExplotacionDto::from(explotacion))))
}

/// Update an explotación (full row)
#[utoipa::path(
    put,
    path = "/api/explotaciones/{id}",
    tag = EXPLOTACION_TAG,
    responses(
        (status = 200, description = "The updated explotación, or null", body = Option<ExplotacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_explotacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateExplotacionDto>,
) -> Result<impl IntoResponse, Error> {
    let explotacion_repository = ExplotacionRepository::new(&state.db);

    let explotacion = explotacion_repository.update(id, &dto).await?;

    Ok((StatusCode::OK, Json(explotacion.map(ExplotacionDto::from))))
}

/// Delete an explotación
#[utoipa::path(
    delete,
    path = "/api/explotaciones/{id}",
    tag = EXPLOTACION_TAG,
    responses(
        (status = 204, description = "Explotación deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_explotacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let explotacion_repository = ExplotacionRepository::new(&state.db);

    explotacion_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
