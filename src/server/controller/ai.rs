use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        ai::{ChatRequestDto, ChatResponseDto},
        api::ErrorDto,
    },
    server::{
        error::AppError, middleware::extract::ValidatedJson, service::ai::AiService,
        state::AppState,
    },
};

/// Tag for grouping AI endpoints in OpenAPI documentation
pub static AI_TAG: &str = "ai";

/// Chat with the assistant.
///
/// Forwards the conversation history and the new input to Gemini and returns the
/// generated reply as `{ text }`.
///
/// # Returns
/// - `200 OK` - Generated reply
/// - `400 Bad Request` - Neither input nor history was sent
/// - `500 Internal Server Error` - No API key configured or the upstream call failed
#[utoipa::path(
    post,
    path = "/api/ai/chat",
    tag = AI_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Generated reply", body = ChatResponseDto),
        (status = 400, description = "Empty conversation", body = ErrorDto),
        (status = 500, description = "AI service unavailable", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let reply = AiService::new(&state.http_client, state.gemini_api_key.as_deref())
        .chat(payload)
        .await?;

    Ok((StatusCode::OK, Json(reply)))
}
