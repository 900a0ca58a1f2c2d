use auth::require_admin;
use auth::Principal;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ProductData;
use crate::inbound::http::router::AppState;
use crate::product::models::ProductId;
use crate::product::models::UpdateProductCommand;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProductRequest {
    id: String,
    name: String,
    description: String,
    price: i64,
}

/// Admin-only: overwrite a product's name, description, and price.
pub async fn update_product(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductData>, ApiError> {
    require_admin(&principal)?;

    let id = ProductId::from_string(&body.id)
        .map_err(|_| ApiError::BadRequest("Invalid Request".to_string()))?;

    let command = UpdateProductCommand {
        id,
        name: body.name,
        description: body.description,
        price: body.price,
    };

    let product = state.product_service.update(command).await?;

    Ok(Json(ProductData::from(&product)))
}
