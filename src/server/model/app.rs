use sea_orm::DatabaseConnection;

use crate::server::service::chatbot::ChatClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub chat: ChatClient,
}
