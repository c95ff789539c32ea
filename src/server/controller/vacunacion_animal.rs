use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vacunacion::{CreateVacunacionAnimalDto, VacunacionAnimalDto},
    },
    server::{
        data::vacunacion_animal::VacunacionAnimalRepository, error::Error, model::app::AppState,
    },
};

pub static VACUNACION_ANIMAL_TAG: &str = "vacunaciones_animal";

/// Get all vacunación-animal links
#[utoipa::path(
    get,
    path = "/api/vacunaciones_animal",
    tag = VACUNACION_ANIMAL_TAG,
    responses(
        (status = 200, description = "Success when retrieving links", body = Vec<VacunacionAnimalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vacunaciones_animal(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_animal_repository = VacunacionAnimalRepository::new(&state.db);

    let links = vacunacion_animal_repository.get_all().await?;
    let dtos: Vec<VacunacionAnimalDto> = links.into_iter().map(VacunacionAnimalDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a vacunación-animal link by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/vacunaciones_animal/{id}",
    tag = VACUNACION_ANIMAL_TAG,
    responses(
        (status = 200, description = "The link, or null", body = Option<VacunacionAnimalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vacunacion_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_animal_repository = VacunacionAnimalRepository::new(&state.db);

    let link = vacunacion_animal_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(link.map(VacunacionAnimalDto::from))))
}

/// Link an animal to a vaccination campaign
#[utoipa::path(
    post,
    path = "/api/vacunaciones_animal",
    tag = VACUNACION_ANIMAL_TAG,
    responses(
        (status = 201, description = "Link created", body = VacunacionAnimalDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vacunacion_animal(
    State(state): State<AppState>,
    Json(dto): Json<CreateVacunacionAnimalDto>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_animal_repository = VacunacionAnimalRepository::new(&state.db);

    let link = vacunacion_animal_repository.create(&dto).await?;

    Ok((StatusCode::CREATED, Json(VacunacionAnimalDto::from(link))))
}

/// Update a vacunación-animal link (full row)
#[utoipa::path(
    put,
    path = "/api/vacunaciones_animal/{id}",
    tag = VACUNACION_ANIMAL_TAG,
    responses(
        (status = 200, description = "The updated link, or null", body = Option<VacunacionAnimalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vacunacion_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateVacunacionAnimalDto>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_animal_repository = VacunacionAnimalRepository::new(&state.db);

    let link = vacunacion_animal_repository.update(id, &dto).await?;

    Ok((StatusCode::OK, Json(link.map(VacunacionAnimalDto::from))))
}

/// Delete a vacunación-animal link
#[utoipa::path(
    delete,
    path = "/api/vacunaciones_animal/{id}",
    tag = VACUNACION_ANIMAL_TAG,
    responses(
        (status = 204, description = "Link deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vacunacion_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vacunacion_animal_repository = VacunacionAnimalRepository::new(&state.db);

    vacunacion_animal_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
