use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::AuthUser;
use crate::chat::conversation::{
    fallback, history_turns, new_message, normalize_incoming, welcome, IncomingMessage,
};
use crate::chat::prompts::{advice_system_prompt, chat_system_prompt};
use crate::chat::repository;
use crate::errors::AppError;
use crate::llm_client::{ChatTurn, DEFAULT_MAX_TOKENS};
use crate::models::chat::{ChatSessionRow, MessageRole};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub content: Option<String>,
    #[serde(default)]
    pub clear: bool,
}

#[derive(Debug, Deserialize)]
pub struct CareerAdviceRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct CareerAdviceResponse {
    pub advice: String,
}

fn session_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Chat session {id} not found"))
}

/// GET /api/chat-sessions
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ChatSessionRow>>, AppError> {
    Ok(Json(
        repository::list_sessions(&state.db, auth.user.id).await?,
    ))
}

/// POST /api/chat-sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<ChatSessionRow>), AppError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let messages = normalize_incoming(req.messages);
    let session = repository::create_session(&state.db, auth.user.id, &messages).await?;
    info!("Chat session {} created for user {}", session.id, auth.user.id);
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/chat-sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ChatSessionRow>, AppError> {
    let session = repository::get_owned_session(&state.db, id, auth.user.id)
        .await?
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(session))
}

/// POST /api/chat-sessions/:id/messages
///
/// `clear: true` resets the conversation to a single greeting. Otherwise the
/// user message is stored, the model answers with the full history, and its
/// reply is appended. A model failure appends a fixed apology instead of failing.
pub async fn handle_post_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(req): Json<PostMessageRequest>,
) -> Result<Json<ChatSessionRow>, AppError> {
    let session = repository::get_owned_session(&state.db, id, auth.user.id)
        .await?
        .ok_or_else(|| session_not_found(id))?;

    if req.clear {
        let greeting = welcome(req.content.as_deref());
        let cleared = repository::replace_messages(&state.db, id, &[greeting]).await?;
        info!("Chat session {id} cleared");
        return Ok(Json(cleared));
    }

    let content = req
        .content
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("Message content must not be blank".into()))?;

    let user_message = new_message(MessageRole::User, content);
    repository::append_message(&state.db, id, &user_message).await?;

    let turns = history_turns(&session.messages.0, &user_message);
    let reply = match state
        .llm
        .complete(&chat_system_prompt(), &turns, DEFAULT_MAX_TOKENS)
        .await
    {
        Ok(text) => new_message(MessageRole::Assistant, text),
        Err(e) => {
            warn!("Chat reply for session {id} failed, sending fallback: {e}");
            fallback()
        }
    };

    let updated = repository::append_message(&state.db, id, &reply).await?;
    Ok(Json(updated))
}

/// POST /api/career-advice
pub async fn handle_career_advice(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CareerAdviceRequest>,
) -> Result<Json<CareerAdviceResponse>, AppError> {
    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Validation("Prompt must not be blank".into()));
    }
    let advice = state
        .llm
        .complete(
            &advice_system_prompt(),
            &[ChatTurn::user(prompt)],
            DEFAULT_MAX_TOKENS,
        )
        .await?;
    Ok(Json(CareerAdviceResponse { advice }))
}
