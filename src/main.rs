use agromano::server::{self, config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let session = startup::session_layer();
    let cors = startup::cors_layer(&config).unwrap();
    let chat = startup::build_chat_client(&config);

    tracing::info!("Starting server on {}", config.listen_addr);

    let router = server::router::routes()
        .with_state(AppState { db, chat })
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap();
    axum::serve(listener, router).await.unwrap();
}
