use auth::AccessError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

use crate::user::errors::UserError;
use crate::user::errors::UsernameError;
use crate::user::models::User;

pub mod list_users;
pub mod login;
pub mod me;
pub mod register;
pub mod remove_user;
pub mod update_role;

/// HTTP error taxonomy for this service.
///
/// Responses carry plain-text bodies. Infrastructure failures respond with an
/// opaque body; the cause is only traced server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(_) => ApiError::BadRequest("Invalid Request".to_string()),
            UserError::AlreadyExists(_) => ApiError::Conflict("User already exists".to_string()),
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid login credentials".to_string())
            }
            // Hashing failures at creation surface as a conflict (the user
            // record was not created); the cause stays server-side.
            UserError::Hashing(msg) => {
                tracing::error!(error = %msg, "Password hashing failed");
                ApiError::Conflict("Internal server error".to_string())
            }
            UserError::Token(msg) | UserError::Database(msg) => ApiError::Internal(msg),
            UserError::Queue(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<UsernameError> for ApiError {
    fn from(_: UsernameError) -> Self {
        ApiError::BadRequest("Invalid Request".to_string())
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        tracing::warn!(error = %err, "Privileged request rejected");
        ApiError::Unauthorized("Unauthorized".to_string())
    }
}

/// Public representation of a user: identity and role, never the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub role: auth::Role,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            role: user.role,
        }
    }
}
