use sqlx::PgPool;

use crate::errors::{is_unique_violation, AppError};
use crate::models::user::User;

const USER_COLUMNS: &str = "id, username, password, name, email, is_admin, created_at";

pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Inserts a user. A taken username surfaces as `Conflict`.
pub async fn create_user(pool: &PgPool, new: NewUser<'_>) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (username, password, name, email)
        VALUES ($1, $2, $3, $4)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(new.username)
    .bind(new.password_hash)
    .bind(new.name)
    .bind(new.email)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict(format!("Username '{}' is already taken", new.username))
        } else {
            AppError::Database(e)
        }
    })
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

/// Deletes a user and, through FK cascades, their quiz results and chat sessions.
/// Returns false when no such user exists.
pub async fn delete_user(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
