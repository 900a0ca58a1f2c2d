use auth::require_admin;
use auth::Principal;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::UserResponse;
use crate::inbound::http::router::AppState;

/// Admin-only: list every registered user.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    require_admin(&principal)?;

    let users = state.user_service.list().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}
