use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        vacunacion::{CreateVacunacionDto, VacunacionDto},
    },
    server::{
        data::vacunacion::VacunacionRepository,
        error::{validation::ValidationError, Error},
        model::app::AppState,
    },
};

pub static VACUNACION_TAG: &str = "vacunaciones";

/// Get all vacunaciones
#[utoipa::path(
    get,
    path = "/api/vacunaciones",
    tag = VACUNACION_TAG,
    responses(
        (status = 200, description = "Success when retrieving vacunaciones", body = Vec<VacunacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vacunaciones(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vacunacion_repository = VacunacionRepository::new(&state.db);

    let vacunaciones = vacunacion_repository.get_all().await?;
    let dtos: Vec<VacunacionDto> = vacunaciones.into_iter().map(VacunacionDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a vacunación by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/vacunaciones/{id}",
    tag = VACUNACION_TAG,
    responses(
        (status = 200, description = "The vacunación, or null", body = Option<VacunacionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vacunacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_repository = VacunacionRepository::new(&state.db);

    let vacunacion = vacunacion_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(vacunacion.map(VacunacionDto::from))))
}

/// Create a vacunación; repeating (fecha, tipo) within an explotación
/// yields a 400
#[utoipa::path(
    post,
    path = "/api/vacunaciones",
    tag = VACUNACION_TAG,
    responses(
        (status = 201, description = "Vacunación created", body = VacunacionDto),
        (status = 400, description = "Campaign of that type already exists on that date", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vacunacion(
    State(state): State<AppState>,
    Json(dto): Json<CreateVacunacionDto>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_repository = VacunacionRepository::new(&state.db);

    let vacunacion = vacunacion_repository
        .create(&dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::VacunacionDuplicada))?;

    Ok((StatusCode::CREATED, Json(VacunacionDto::from(vacunacion))))
}

/// Update a vacunación (full row)
#[utoipa::path(
    put,
    path = "/api/vacunaciones/{id}",
    tag = VACUNACION_TAG,
    responses(
        (status = 200, description = "The updated vacunación, or null", body = Option<VacunacionDto>),
        (status = 400, description = "Campaign of that type already exists on that date", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vacunacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateVacunacionDto>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_repository = VacunacionRepository::new(&state.db);

    let vacunacion = vacunacion_repository
        .update(id, &dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::VacunacionDuplicada))?;

    Ok((StatusCode::OK, Json(vacunacion.map(VacunacionDto::from))))
}

/// Delete a vacunación
#[utoipa::path(
    delete,
    path = "/api/vacunaciones/{id}",
    tag = VACUNACION_TAG,
    responses(
        (status = 204, description = "Vacunación deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vacunacion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_repository = VacunacionRepository::new(&state.db);

    vacunacion_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
