use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::auth::repository::{self, NewUser};
use crate::auth::{session, AuthUser};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    if req.username.trim().is_empty() {
        return Err(AppError::Validation("Username must not be blank".into()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Blank optional profile fields are stored as NULL.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate_registration(&req)?;

    let password_hash = hash_password_blocking(req.password.clone()).await?;
    let user = repository::create_user(
        &state.db,
        NewUser {
            username: req.username.trim(),
            password_hash: &password_hash,
            name: non_blank(&req.name),
            email: non_blank(&req.email),
        },
    )
    .await?;

    let token = session::create_session(&state.redis, user.id, state.config.session_ttl_secs).await?;
    info!("Registered user {} ({})", user.id, user.username);
    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = repository::find_by_username(&state.db, req.username.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;
    if !verify_password_blocking(req.password, user.password.clone()).await? {
        return Err(AppError::Unauthorized);
    }

    let token = session::create_session(&state.redis, user.id, state.config.session_ttl_secs).await?;
    info!("User {} signed in", user.id);
    Ok(Json(AuthResponse { token, user }))
}

/// POST /api/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, AppError> {
    session::delete_session(&state.redis, &auth.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/user
pub async fn handle_current_user(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            password: password.into(),
            name: None,
            email: None,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(validate_registration(&request("ada", "secret1")).is_ok());
    }

    #[test]
    fn test_blank_username_rejected() {
        let err = validate_registration(&request("   ", "secret1")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_short_password_rejected() {
        let err = validate_registration(&request("ada", "12345")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(validate_registration(&request("ada", "123456")).is_ok());
    }

    #[test]
    fn test_blank_profile_fields_become_null() {
        assert_eq!(non_blank(&Some("  ".into())), None);
        assert_eq!(non_blank(&Some(" Ada ".into())), Some("Ada"));
        assert_eq!(non_blank(&None), None);
    }
}
