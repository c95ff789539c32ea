use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        usuario::{CreateUsuarioDto, UpdateUsuarioDto, UsuarioDto},
    },
    server::{
        data::usuario::UsuarioRepository,
        error::Error,
        model::{app::AppState, session::usuario::SessionUsuarioId},
        service::auth::AuthService,
    },
};

pub static USUARIO_TAG: &str = "usuarios";

/// Get all usuarios
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = USUARIO_TAG,
    responses(
        (status = 200, description = "Success when retrieving usuarios", body = Vec<UsuarioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usuarios(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let usuario_repository = UsuarioRepository::new(&state.db);

    let usuarios = usuario_repository.get_all().await?;
    let dtos: Vec<UsuarioDto> = usuarios.into_iter().map(UsuarioDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a usuario by id; the body is null when the id has no row
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = USUARIO_TAG,
    responses(
        (status = 200, description = "The usuario, or null", body = Option<UsuarioDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let usuario_repository = UsuarioRepository::new(&state.db);

    let usuario = usuario_repository.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(usuario.map(UsuarioDto::from))))
}

/// Create a usuario; the password is hashed before storage
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = USUARIO_TAG,
    responses(
        (status = 201, description = "Usuario created", body = UsuarioDto),
        (status = 400, description = "Email already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_usuario(
    State(state): State<AppState>,
    Json(dto): Json<CreateUsuarioDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let usuario = auth_service.register(&dto).await?;

    Ok((StatusCode::CREATED, Json(UsuarioDto::from(usuario))))
}

/// Update a usuario; omitting the password keeps the stored hash
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = USUARIO_TAG,
    responses(
        (status = 200, description = "The updated usuario, or null", body = Option<UsuarioDto>),
        (status = 400, description = "Email already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUsuarioDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let usuario = auth_service.update_usuario(id, &dto).await?;

    Ok((StatusCode::OK, Json(usuario.map(UsuarioDto::from))))
}

/// Delete a usuario and clear their session
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = USUARIO_TAG,
    responses(
        (status = 204, description = "Usuario deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_usuario(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let usuario_repository = UsuarioRepository::new(&state.db);

    usuario_repository.delete(id).await?;

    // Deleting an account also ends its session, as the original flow did
    if SessionUsuarioId::get(&session).await? == Some(id) {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}
