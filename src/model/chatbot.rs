use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatMessageDto {
    pub message: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatResponseDto {
    pub response: String,
}
