use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::Username;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // An empty username cannot belong to any account; same response as a
    // wrong password so login never leaks which part failed.
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid login credentials".to_string()))?;

    let access_token = state.user_service.login(&username, &body.password).await?;

    Ok(Json(LoginResponse { access_token }))
}
