use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        inspeccion::{CreateInspeccionDto, InspeccionDto},
    },
    server::{
        data::inspeccion::InspeccionRepository,
        error::{validation::ValidationError, Error},
        model::app::AppState,
    },
};

pub static INSPECCION_TAG: &str = "inspecciones";

/// Get all inspecciones
#[utoipa::path(
    get,
    path = "/api/inspecciones",
    tag = INSPECCION_TAG,
    responses(
        (status = 200, description = "Success when retrieving inspecciones", body = Vec<InspeccionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inspecciones(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let inspeccion_repository = InspeccionRepository::new(&state.db);

    let inspecciones = inspeccion_repository.get_all().await?;
    let dtos: Vec<InspeccionDto> = inspecciones.into_iter().map(InspeccionDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an inspección by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/inspecciones/{id}",
    tag = INSPECCION_TAG,
    responses(
        (status = 200, description = "The inspección, or null", body = Option<InspeccionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inspeccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let inspeccion_repository = InspeccionRepository::new(&state.db);

    let inspeccion = inspeccion_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(inspeccion.map(InspeccionDto::from))))
}

/// Create an inspección; reusing an acta number within the same explotación
/// yields a 400
#[utoipa::path(
    post,
    path = "/api/inspecciones",
    tag = INSPECCION_TAG,
    responses(
        (status = 201, description = "Inspección created", body = InspeccionDto),
        (status = 400, description = "Acta number already registered for this explotación", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inspeccion(
    State(state): State<AppState>,
    Json(dto): Json<CreateInspeccionDto>,
) -> Result<impl IntoResponse, Error> {
    let inspeccion_repository = InspeccionRepository::new(&state.db);

    let inspeccion = inspeccion_repository
        .create(&dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::ActaEnUso))?;

    Ok((StatusCode::CREATED, Json(InspeccionDto::from(inspeccion))))
}

/// Update an inspección (full row)
#[utoipa::path(
    put,
    path = "/api/inspecciones/{id}",
    tag = INSPECCION_TAG,
    responses(
        (status = 200, description = "The updated inspección, or null", body = Option<InspeccionDto>),
        (status = 400, description = "Acta number already registered for this explotación", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inspeccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateInspeccionDto>,
) -> Result<impl IntoResponse, Error> {
    let inspeccion_repository = InspeccionRepository::new(&state.db);

    let inspeccion = inspeccion_repository
        .update(id, &dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::ActaEnUso))?;

    Ok((StatusCode::OK, Json(inspeccion.map(InspeccionDto::from))))
}

/// Delete an inspección
#[utoipa::path(
    delete,
    path = "/api/inspecciones/{id}",
    tag = INSPECCION_TAG,
    responses(
        (status = 204, description = "Inspección deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inspeccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let inspeccion_repository = InspeccionRepository::new(&state.db);

    inspeccion_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
