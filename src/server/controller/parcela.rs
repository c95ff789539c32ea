use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        parcela::{CreateParcelaDto, ParcelaDto},
    },
    server::{data::parcela::ParcelaRepository, error::Error, model::app::AppState},
};

pub static PARCELA_TAG: &str = "parcelas";

/// Get all parcelas
#[utoipa::path(
    get,
    path = "/api/parcelas",
    tag = PARCELA_TAG,
    responses(
        (status = 200, description = "Success when retrieving parcelas", body = Vec<ParcelaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parcelas(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let parcela_repository = ParcelaRepository::new(&state.db);

    let parcelas = parcela_repository.get_all().await?;
    let dtos: Vec<ParcelaDto> = parcelas.into_iter().map(ParcelaDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a parcela by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/parcelas/{id}",
    tag = PARCELA_TAG,
    responses(
        (status = 200, description = "The parcela, or null", body = Option<ParcelaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parcela(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let parcela_repository = ParcelaRepository::new(&state.db);

    let parcela = parcela_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(parcela.map(ParcelaDto::from))))
}

/// Create a parcela
#[utoipa::path(
    post,
    path = "/api/parcelas",
    tag = PARCELA_TAG,
    responses(
        (status = 201, description = "Parcela created", body = ParcelaDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_parcela(
    State(state): State<AppState>,
    Json(dto): Json<CreateParcelaDto>,
) -> Result<impl IntoResponse, Error> {
    let parcela_repository = ParcelaRepository::new(&state.db);

    let parcela = parcela_repository.create(&dto).await?;

    Ok((StatusCode::CREATED, Json(ParcelaDto::from(parcela))))
}

/// Update a parcela (full row)
#[utoipa::path(
    put,
    path = "/api/parcelas/{id}",
    tag = PARCELA_TAG,
    responses(
        (status = 200, description = "The updated parcela, or null", body = Option<ParcelaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_parcela(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateParcelaDto>,
) -> Result<impl IntoResponse, Error> {
    let parcela_repository = ParcelaRepository::new(&state.db);

    let parcela = parcela_repository.update(id, &dto).await?;

    Ok((StatusCode::OK, Json(parcela.map(ParcelaDto::from))))
}

/// Delete a parcela
#[utoipa::path(
    delete,
    path = "/api/parcelas/{id}",
    tag = PARCELA_TAG,
    responses(
        (status = 204, description = "Parcela deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_parcela(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let parcela_repository = ParcelaRepository::new(&state.db);

    parcela_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
