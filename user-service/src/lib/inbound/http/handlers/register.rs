use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::RegisterUserCommand;
use crate::user::models::Username;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: String,
    password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    if body.username.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest("Invalid Request".to_string()));
    }

    let command = RegisterUserCommand::new(Username::new(body.username)?, body.password);

    state.user_service.register(command).await?;

    Ok((StatusCode::OK, "Success"))
}
