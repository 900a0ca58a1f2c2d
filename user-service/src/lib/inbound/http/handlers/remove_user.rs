use auth::require_admin;
use auth::Principal;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::Username;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoveParams {
    username: String,
}

/// Admin-only: delete a user by username.
pub async fn remove_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<RemoveParams>,
) -> Result<(StatusCode, &'static str), ApiError> {
    require_admin(&principal)?;

    let username = Username::new(params.username)?;

    state.user_service.remove(&username).await?;

    Ok((StatusCode::OK, "user removed"))
}
