use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        movimiento::{CreateMovimientoDto, MovimientoDto},
    },
    server::{data::movimiento::MovimientoRepository, error::Error, model::app::AppState},
};

pub static MOVIMIENTO_TAG: &str = "movimientos";

/// Get all movimientos
#[utoipa::path(
    get,
    path = "/api/movimientos",
    tag = MOVIMIENTO_TAG,
    responses(
        (status = 200, description = "Success when retrieving movimientos", body = Vec<MovimientoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movimientos(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let movimiento_repository = MovimientoRepository::new(&state.db);

    let movimientos = movimiento_repository.get_all().await?;
    let dtos: Vec<MovimientoDto> = movimientos.into_iter().map(MovimientoDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a movimiento by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/movimientos/{id}",
    tag = MOVIMIENTO_TAG,
    responses(
        (status = 200, description = "The movimiento, or null", body = Option<MovimientoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movimiento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let movimiento_repository = MovimientoRepository::new(&state.db);

    let movimiento = movimiento_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(movimiento.map(MovimientoDto::from))))
}

/// Create a movimiento
#[utoipa::path(
    post,
    path = "/api/movimientos",
    tag = MOVIMIENTO_TAG,
    responses(
        (status = 201, description = "Movimiento created", body = MovimientoDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_movimiento(
    State(state): State<AppState>,
    Json(dto): Json<CreateMovimientoDto>,
) -> Result<impl IntoResponse, Error> {
    let movimiento_repository = MovimientoRepository::new(&state.db);

    let movimiento = movimiento_repository.create(&dto).await?;

    Ok((StatusCode::CREATED, Json(MovimientoDto::from(movimiento))))
}

/// Update a movimiento (full row)
#[utoipa::path(
    put,
    path = "/api/movimientos/{id}",
    tag = MOVIMIENTO_TAG,
    responses(
        (status = 200, description = "The updated movimiento, or null", body = Option<MovimientoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_movimiento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateMovimientoDto>,
) -> Result<impl IntoResponse, Error> {
    let movimiento_repository = MovimientoRepository::new(&state.db);

    let movimiento = movimiento_repository.update(id, &dto).await?;

    Ok((StatusCode::OK, Json(movimiento.map(MovimientoDto::from))))
}

/// Delete a movimiento
#[utoipa::path(
    delete,
    path = "/api/movimientos/{id}",
    tag = MOVIMIENTO_TAG,
    responses(
        (status = 204, description = "Movimiento deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_movimiento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let movimiento_repository = MovimientoRepository::new(&state.db);

    movimiento_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
