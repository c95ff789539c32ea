use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    service::chatbot::ChatClient,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the cookie-keyed server-side session layer.
///
/// Sessions live in an in-process memory store; a restart logs everyone
/// out. Cookies are http-only, SameSite=Lax, secure outside debug builds,
/// and expire after seven days of inactivity.
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    use tower_sessions::{
        cookie::{time::Duration, SameSite},
        Expiry,
    };

    let session_store = MemoryStore::default();

    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}

/// CORS restricted to the configured frontend origin, with credentials so
/// the session cookie travels along.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "FRONTEND_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Build the generative-AI client used by the chatbot proxy
pub fn build_chat_client(config: &Config) -> ChatClient {
    ChatClient::from_config(config)
}
