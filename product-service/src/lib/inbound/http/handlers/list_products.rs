use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::ProductSummary;
use crate::inbound::http::router::AppState;

/// Public: list every product.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSummary>>, ApiError> {
    let products = state.product_service.list().await?;

    Ok(Json(products.iter().map(ProductSummary::from).collect()))
}
