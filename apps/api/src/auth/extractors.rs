use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};

use crate::auth::{repository, session};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// Any signed-in user. Rejects with 401 when the bearer token is missing or stale.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

/// A signed-in user with `is_admin`. Non-admins get 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        let user_id = session::lookup_session(&state.redis, token)
            .await?
            .ok_or(AppError::Unauthorized)?;
        // Deleted users keep their token until it expires; treat it as signed out.
        let user = repository::find_by_id(&state.db, user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser {
            user,
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let AuthUser { user, .. } = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(AppError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
