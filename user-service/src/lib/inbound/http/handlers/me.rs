use auth::Principal;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::UserResponse;
use crate::inbound::http::router::AppState;
use crate::user::models::Username;

/// Self-lookup for the authenticated principal.
pub async fn me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<UserResponse>, ApiError> {
    let username = Username::new(principal.username)
        .map_err(|_| ApiError::Unauthorized("Unauthorized".to_string()))?;

    let user = state.user_service.profile(&username).await?;

    Ok(Json(UserResponse::from(&user)))
}
