use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        informe::{InformeRangoDto, TitularDatosDto},
        titular::{CreateTitularDto, TitularDto},
        usuario::UsuarioDto,
    },
    server::{
        data::titular::TitularRepository,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::informe::{InformeService, RangoFechas},
    },
};

pub static TITULAR_TAG: &str = "titulares";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct TitularListParams {
    /// Restrict the listing to the titulares owned by this usuario
    pub id_usuario: Option<i32>,
}

/// Get all titulares, optionally filtered by owning usuario
#[utoipa::path(
    get,
    path = "/api/titulares",
    tag = TITULAR_TAG,
    params(TitularListParams),
    responses(
        (status = 200, description = "Success when retrieving titulares", body = Vec<TitularDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_titulares(
    State(state): State<AppState>,
    Query(params): Query<TitularListParams>,
) -> Result<impl IntoResponse, Error> {
    let titular_repository = TitularRepository::new(&state.db);

    let titulares = match params.id_usuario {
        Some(usuario_id) => titular_repository.get_by_usuario_id(usuario_id).await?,
        None => titular_repository.get_all().await?,
    };
    let dtos: Vec<TitularDto> = titulares.into_iter().map(TitularDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a titular by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/titulares/{id}",
    tag = TITULAR_TAG,
    responses(
        (status = 200, description = "The titular, or null", body = Option<TitularDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_titular(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let titular_repository = TitularRepository::new(&state.db);

    let titular = titular_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(titular.map(TitularDto::from))))
}

/// Get the usuario that owns a titular (ownership-chain lookup)
#[utoipa::path(
    get,
    path = "/api/titulares/{id}/usuario",
    tag = TITULAR_TAG,
    responses(
        (status = 200, description = "The owning usuario, or null", body = Option<UsuarioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_titular_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let titular_repository = TitularRepository::new(&state.db);

    let usuario = titular_repository.get_usuario_by_titular_id(id).await?;

    Ok((StatusCode::OK, Json(usuario.map(UsuarioDto::from))))
}

/// Create a titular; a duplicate NIF yields a 400
#[utoipa::path(
    post,
    path = "/api/titulares",
    tag = TITULAR_TAG,
    responses(
        (status = 201, description = "Titular created", body = TitularDto),
        (status = 400, description = "NIF already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_titular(
    State(state): State<AppState>,
    Json(dto): Json<CreateTitularDto>,
) -> Result<impl IntoResponse, Error> {
    let titular_repository = TitularRepository::new(&state.db);

    let titular = titular_repository
        .create(&dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::NifEnUso))?;

    Ok((StatusCode::CREATED, Json(TitularDto::from(titular))))
}

/// Update a titular (full row)
#[utoipa::path(
    put,
    path = "/api/titulares/{id}",
    tag = TITULAR_TAG,
    responses(
        (status = 200, description = "The updated titular, or null", body = Option<TitularDto>),
        (status = 400, description = "NIF already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_titular(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateTitularDto>,
) -> Result<impl IntoResponse, Error> {
    let titular_repository = TitularRepository::new(&state.db);

    let titular = titular_repository
        .update(id, &dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::NifEnUso))?;

    Ok((StatusCode::OK, Json(titular.map(TitularDto::from))))
}

/// Delete a titular; its explotaciones are left in place
#[utoipa::path(
    delete,
    path = "/api/titulares/{id}",
    tag = TITULAR_TAG,
    responses(
        (status = 204, description = "Titular deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_titular(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let titular_repository = TitularRepository::new(&state.db);

    titular_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Structured export of the titular's full object graph
#[utoipa::path(
    get,
    path = "/api/titulares/{id}/datos",
    tag = TITULAR_TAG,
    responses(
        (status = 200, description = "The nested export, or null for an unknown titular", body = Option<TitularDatosDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_titular_datos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let informe_service = InformeService::new(&state.db);

    let datos = informe_service.titular_datos(id).await?;

    Ok((StatusCode::OK, Json(datos)))
}

/// PDF report of the titular, restricted to an inclusive date range
#[utoipa::path(
    post,
    path = "/api/titulares/{id}/informe",
    tag = TITULAR_TAG,
    responses(
        (status = 200, description = "PDF document download", content_type = "application/pdf"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generar_informe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(rango): Json<InformeRangoDto>,
) -> Result<impl IntoResponse, Error> {
    let informe_service = InformeService::new(&state.db);

    let bytes = informe_service
        .informe_pdf(
            id,
            RangoFechas {
                start: rango.start_date,
                end: rango.end_date,
            },
        )
        .await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=Informe_{}.pdf", id),
        ),
    ];

    Ok((StatusCode::OK, headers, bytes))
}
