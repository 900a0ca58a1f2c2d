use auth::require_admin;
use auth::Principal;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::product::models::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteParams {
    id: String,
}

/// Admin-only: delete a product by id.
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<DeleteParams>,
) -> Result<(StatusCode, &'static str), ApiError> {
    require_admin(&principal)?;

    let id = ProductId::from_string(&params.id)
        .map_err(|_| ApiError::BadRequest("Invalid Request".to_string()))?;

    state.product_service.delete(&id).await?;

    Ok((StatusCode::OK, "product removed"))
}
