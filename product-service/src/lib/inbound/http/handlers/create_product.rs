use auth::require_admin;
use auth::Principal;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::product::models::CreateProductCommand;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProductRequest {
    name: String,
    description: String,
    price: i64,
}

/// Admin-only: create a product; responds with the generated id.
pub async fn create_product(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, String), ApiError> {
    require_admin(&principal)?;

    let command = CreateProductCommand::new(body.name, body.description, body.price)?;

    let product = state
        .product_service
        .create(command, &principal.username)
        .await?;

    Ok((StatusCode::OK, product.id.to_string()))
}
