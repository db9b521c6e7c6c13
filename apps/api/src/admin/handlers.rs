use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::auth::{repository, AdminUser};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn handle_list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(repository::list_users(&state.db).await?))
}

/// DELETE /api/admin/users/:id
pub async fn handle_delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if id == admin.id {
        return Err(AppError::Validation(
            "Admins cannot delete their own account".into(),
        ));
    }
    if !repository::delete_user(&state.db, id).await? {
        return Err(AppError::NotFound(format!("User {id} not found")));
    }
    info!("Admin {} deleted user {id}", admin.id);
    Ok(StatusCode::NO_CONTENT)
}
