use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        incidencia::{CreateIncidenciaDto, IncidenciaDto},
    },
    server::{data::incidencia::IncidenciaRepository, error::Error, model::app::AppState},
};

pub static INCIDENCIA_TAG: &str = "incidencias";

/// Get all incidencias
#[utoipa::path(
    get,
    path = "/api/incidencias",
    tag = INCIDENCIA_TAG,
    responses(
        (status = 200, description = "Success when retrieving incidencias", body = Vec<IncidenciaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_incidencias(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let incidencia_repository = IncidenciaRepository::new(&state.db);

    let incidencias = incidencia_repository.get_all().await?;
    let dtos: Vec<IncidenciaDto> = incidencias.into_iter().map(IncidenciaDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an incidencia by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/incidencias/{id}",
    tag = INCIDENCIA_TAG,
    responses(
        (status = 200, description = "The incidencia, or null", body = Option<IncidenciaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_incidencia(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let incidencia_repository = IncidenciaRepository::new(&state.db);

    let incidencia = incidencia_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(incidencia.map(IncidenciaDto::from))))
}

/// Create an incidencia
#[utoipa::path(
    post,
    path = "/api/incidencias",
    tag = INCIDENCIA_TAG,
    responses(
        (status = 201, description = "Incidencia created", body = IncidenciaDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_incidencia(
    State(state): State<AppState>,
    Json(dto): Json<CreateIncidenciaDto>,
) -> Result<impl IntoResponse, Error> {
    let incidencia_repository = IncidenciaRepository::new(&state.db);

    let incidencia = incidencia_repository.create(&dto).await?;

    Ok((StatusCode::CREATED, Json(IncidenciaDto::from(incidencia))))
}

/// Update an incidencia (full row)
#[utoipa::path(
    put,
    path = "/api/incidencias/{id}",
    tag = INCIDENCIA_TAG,
    responses(
        (status = 200, description = "The updated incidencia, or null", body = Option<IncidenciaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_incidencia(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateIncidenciaDto>,
) -> Result<impl IntoResponse, Error> {
    let incidencia_repository = IncidenciaRepository::new(&state.db);

    let incidencia = incidencia_repository.update(id, &dto).await?;

    Ok((StatusCode::OK, Json(incidencia.map(IncidenciaDto::from))))
}

/// Delete an incidencia
#[utoipa::path(
    delete,
    path = "/api/incidencias/{id}",
    tag = INCIDENCIA_TAG,
    responses(
        (status = 204, description = "Incidencia deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_incidencia(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let incidencia_repository = IncidenciaRepository::new(&state.db);

    incidencia_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
