use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        medicamento::{CreateMedicamentoDto, MedicamentoDto},
    },
    server::{
        data::medicamento::MedicamentoRepository,
        error::{validation::ValidationError, Error},
        model::app::AppState,
    },
};

pub static MEDICAMENTO_TAG: &str = "medicamentos";

/// Get all medicamentos
#[utoipa::path(
    get,
    path = "/api/medicamentos",
    tag = MEDICAMENTO_TAG,
    responses(
        (status = 200, description = "Success when retrieving medicamentos", body = Vec<MedicamentoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medicamentos(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let medicamento_repository = MedicamentoRepository::new(&state.db);

    let medicamentos = medicamento_repository.get_all().await?;
    let dtos: Vec<MedicamentoDto> = medicamentos.into_iter().map(MedicamentoDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a medicamento by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/medicamentos/{id}",
    tag = MEDICAMENTO_TAG,
    responses(
        (status = 200, description = "The medicamento, or null", body = Option<MedicamentoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medicamento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let medicamento_repository = MedicamentoRepository::new(&state.db);

    let medicamento = medicamento_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(medicamento.map(MedicamentoDto::from))))
}

/// Create a medicamento; reusing an invoice within the same explotación
/// yields a 400
#[utoipa::path(
    post,
    path = "/api/medicamentos",
    tag = MEDICAMENTO_TAG,
    responses(
        (status = 201, description = "Medicamento created", body = MedicamentoDto),
        (status = 400, description = "Invoice already in use for this explotación", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medicamento(
    State(state): State<AppState>,
    Json(dto): Json<CreateMedicamentoDto>,
) -> Result<impl IntoResponse, Error> {
    let medicamento_repository = MedicamentoRepository::new(&state.db);

    let medicamento = medicamento_repository
        .create(&dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::FacturaEnUso))?;

    Ok((StatusCode::CREATED, Json(MedicamentoDto::from(medicamento))))
}

/// Update a medicamento (full row)
#[utoipa::path(
    put,
    path = "/api/medicamentos/{id}",
    tag = MEDICAMENTO_TAG,
    responses(
        (status = 200, description = "The updated medicamento, or null", body = Option<MedicamentoDto>),
        (status = 400, description = "Invoice already in use for this explotación", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_medicamento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateMedicamentoDto>,
) -> Result<impl IntoResponse, Error> {
    let medicamento_repository = MedicamentoRepository::new(&state.db);

    let medicamento = medicamento_repository
        .update(id, &dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::FacturaEnUso))?;

    Ok((StatusCode::OK, Json(medicamento.map(MedicamentoDto::from))))
}

/// Delete a medicamento
#[utoipa::path(
    delete,
    path = "/api/medicamentos/{id}",
    tag = MEDICAMENTO_TAG,
    responses(
        (status = 204, description = "Medicamento deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_medicamento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let medicamento_repository = MedicamentoRepository::new(&state.db);

    medicamento_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
