use auth::require_admin;
use auth::Principal;
use auth::Role;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::UserResponse;
use crate::inbound::http::router::AppState;
use crate::user::models::Username;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleRequest {
    username: String,
    #[serde(rename = "newrole")]
    new_role: String,
}

/// Admin-only: change another user's role.
///
/// Tokens already issued to the target keep their old role until they expire
/// or the user logs in again.
pub async fn update_role(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<RoleRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    require_admin(&principal)?;

    let new_role: Role = body
        .new_role
        .parse()
        .map_err(|e: auth::principal::ParseRoleError| ApiError::BadRequest(e.to_string()))?;
    let username = Username::new(body.username)?;

    let user = state.user_service.update_role(&username, new_role).await?;

    Ok(Json(UserResponse::from(&user)))
}
