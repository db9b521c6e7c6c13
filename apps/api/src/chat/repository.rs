use sqlx::types::Json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::chat::{ChatMessage, ChatSessionRow};

const SESSION_COLUMNS: &str = "id, user_id, messages, created_at, updated_at";

/// Most recently active first.
pub async fn list_sessions(pool: &PgPool, user_id: i32) -> Result<Vec<ChatSessionRow>, AppError> {
    let rows = sqlx::query_as::<_, ChatSessionRow>(&format!(
        "SELECT {SESSION_COLUMNS} FROM chat_sessions WHERE user_id = $1 ORDER BY updated_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_session(
    pool: &PgPool,
    user_id: i32,
    messages: &[ChatMessage],
) -> Result<ChatSessionRow, AppError> {
    let row = sqlx::query_as::<_, ChatSessionRow>(&format!(
        "INSERT INTO chat_sessions (user_id, messages) VALUES ($1, $2) RETURNING {SESSION_COLUMNS}"
    ))
    .bind(user_id)
    .bind(Json(messages))
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// A session visible to `user_id`. Other users' sessions look absent.
pub async fn get_owned_session(
    pool: &PgPool,
    id: i32,
    user_id: i32,
) -> Result<Option<ChatSessionRow>, AppError> {
    let row = sqlx::query_as::<_, ChatSessionRow>(&format!(
        "SELECT {SESSION_COLUMNS} FROM chat_sessions WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn replace_messages(
    pool: &PgPool,
    id: i32,
    messages: &[ChatMessage],
) -> Result<ChatSessionRow, AppError> {
    let row = sqlx::query_as::<_, ChatSessionRow>(&format!(
        r#"
        UPDATE chat_sessions
        SET messages = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING {SESSION_COLUMNS}
        "#
    ))
    .bind(Json(messages))
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Atomic append (`messages || $1`); no read-modify-write.
pub async fn append_message(
    pool: &PgPool,
    id: i32,
    message: &ChatMessage,
) -> Result<ChatSessionRow, AppError> {
    let row = sqlx::query_as::<_, ChatSessionRow>(&format!(
        r#"
        UPDATE chat_sessions
        SET messages = messages || $1::jsonb, updated_at = NOW()
        WHERE id = $2
        RETURNING {SESSION_COLUMNS}
        "#
    ))
    .bind(Json([message]))
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}
