use agromano::server::{model::app::AppState, service::chatbot::ChatClient};
use agromano_test_utils::prelude::*;

/// Full schema plus an [`AppState`] whose chat client points at the test's
/// mock HTTP server.
pub async fn test_setup_with_state() -> Result<(TestSetup, AppState), TestError> {
    let test = test_setup_with_agromano_tables!()?;

    let chat = ChatClient::new(&test.server.url(), "test_key", "gemini-2.0-flash");
    let state = AppState {
        db: test.db.clone(),
        chat,
    };

    Ok((test, state))
}
