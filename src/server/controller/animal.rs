use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        animal::{AnimalDto, CreateAnimalDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        data::animal::AnimalRepository,
        error::{validation::ValidationError, Error},
        model::app::AppState,
    },
};

pub static ANIMAL_TAG: &str = "animales";

/// Get all animales
#[utoipa::path(
    get,
    path = "/api/animales",
    tag = ANIMAL_TAG,
    responses(
        (status = 200, description = "Success when retrieving animales", body = Vec<AnimalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_animales(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let animal_repository = AnimalRepository::new(&state.db);

    let animales = animal_repository.get_all().await?;
    let dtos: Vec<AnimalDto> = animales.into_iter().map(AnimalDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an animal by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/animales/{id}",
    tag = ANIMAL_TAG,
    responses(
        (status = 200, description = "The animal, or null", body = Option<AnimalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let animal_repository = AnimalRepository::new(&state.db);

    let animal = animal_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(animal.map(AnimalDto::from))))
}

/// Create an animal; a duplicate identification yields a 400
#[utoipa::path(
    post,
    path = "/api/animales",
    tag = ANIMAL_TAG,
    responses(
        (status = 201, description = "Animal created", body = AnimalDto),
        (status = 400, description = "Identification already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_animal(
    State(state): State<AppState>,
    Json(dto): Json<CreateAnimalDto>,
) -> Result<impl IntoResponse, Error> {
    let animal_repository = AnimalRepository::new(&state.db);

    let animal = animal_repository
        .create(&dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::IdentificacionEnUso))?;

    Ok((StatusCode::CREATED, Json(AnimalDto::from(animal))))
}

/// Update an animal (full row)
#[utoipa::path(
    put,
    path = "/api/animales/{id}",
    tag = ANIMAL_TAG,
    responses(
        (status = 200, description = "The updated animal, or null", body = Option<AnimalDto>),
        (status = 400, description = "Identification already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateAnimalDto>,
) -> Result<impl IntoResponse, Error> {
    let animal_repository = AnimalRepository::new(&state.db);

    let animal = animal_repository
        .update(id, &dto)
        .await
        .map_err(|err| Error::conflict_or_db(err, ValidationError::IdentificacionEnUso))?;

    Ok((StatusCode::OK, Json(animal.map(AnimalDto::from))))
}

/// Delete an animal
#[utoipa::path(
    delete,
    path = "/api/animales/{id}",
    tag = ANIMAL_TAG,
    responses(
        (status = 204, description = "Animal deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_animal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let animal_repository = AnimalRepository::new(&state.db);

    animal_repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
