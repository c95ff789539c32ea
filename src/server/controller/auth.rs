use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthStatusDto, LoginDto},
        usuario::{CreateUsuarioDto, UsuarioDto},
    },
    server::{
        data::usuario::UsuarioRepository,
        error::Error,
        model::{app::AppState, session::usuario::SessionUsuarioId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new usuario account
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    responses(
        (status = 201, description = "Usuario created", body = UsuarioDto),
        (status = 400, description = "Email already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<CreateUsuarioDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let usuario = auth_service.register(&dto).await?;

    Ok((StatusCode::CREATED, Json(UsuarioDto::from(usuario))))
}

/// Log in with email and password, storing the usuario id in the session
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login succeeded", body = MessageDto),
        (status = 401, description = "Unknown email or wrong password", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    // Failed verification returns before the session is touched
    let usuario = auth_service.login(&dto).await?;

    SessionUsuarioId::insert(&session, usuario.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Login exitoso".to_string(),
        }),
    ))
}

/// Log out the current usuario by clearing their session
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_usuario_id = SessionUsuarioId::get(&session).await?;

    // Only clear session if there is actually a usuario in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_usuario_id.is_some() {
        session.clear().await;
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logout exitoso".to_string(),
        }),
    ))
}

/// Report whether a session is active and for which usuario
#[utoipa::path(
    get,
    path = "/api/check-auth",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authentication status", body = AuthStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_auth(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let maybe_usuario_id = SessionUsuarioId::get(&session).await?;

    let usuario = match maybe_usuario_id {
        Some(usuario_id) => {
            let usuario_repository = UsuarioRepository::new(&state.db);
            let usuario = usuario_repository.get_by_id(usuario_id).await?;

            if usuario.is_none() {
                // Clear session for usuario not found in database
                session.clear().await;

                tracing::warn!(
                    "Failed to find usuario ID {} in database despite having an active session;
                    cleared session, they will need to relog to fix",
                    usuario_id
                );
            }

            usuario
        }
        None => None,
    };

    Ok((
        StatusCode::OK,
        Json(AuthStatusDto {
            is_authenticated: usuario.is_some(),
            usuario: usuario.map(UsuarioDto::from),
        }),
    ))
}
