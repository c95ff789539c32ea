use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chatbot::{ChatMessageDto, ChatResponseDto},
    },
    server::{error::Error, model::app::AppState},
};

pub static CHATBOT_TAG: &str = "chatbot";

/// Forward a free-text message to the generative-AI assistant
#[utoipa::path(
    post,
    path = "/api/chatbot",
    tag = CHATBOT_TAG,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseDto),
        (status = 500, description = "Upstream completion failed", body = ErrorDto)
    ),
)]
pub async fn chatbot(
    State(state): State<AppState>,
    Json(dto): Json<ChatMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let response = state.chat.generate(&dto.message).await?;

    Ok((StatusCode::OK, Json(ChatResponseDto { response })))
}
