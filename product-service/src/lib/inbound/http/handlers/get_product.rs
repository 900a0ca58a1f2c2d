use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ProductData;
use crate::inbound::http::router::AppState;
use crate::product::models::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductParams {
    id: String,
}

/// Public: fetch a single product by id.
pub async fn get_product(
    State(state): State<AppState>,
    Query(params): Query<ProductParams>,
) -> Result<Json<ProductData>, ApiError> {
    let id = ProductId::from_string(&params.id)
        .map_err(|_| ApiError::BadRequest("Invalid Request".to_string()))?;

    let product = state.product_service.get(&id).await?;

    Ok(Json(ProductData::from(&product)))
}
