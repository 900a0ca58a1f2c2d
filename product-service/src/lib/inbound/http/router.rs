use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product::create_product;
use super::handlers::delete_product::delete_product;
use super::handlers::get_product::get_product;
use super::handlers::list_products::list_products;
use super::handlers::update_product::update_product;
use crate::product::ports::ProductServicePort;

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductServicePort>,
    pub token_service: Arc<TokenService>,
}

pub fn create_router(
    product_service: Arc<dyn ProductServicePort>,
    token_service: Arc<TokenService>,
) -> Router {
    let state = AppState {
        product_service,
        token_service: Arc::clone(&token_service),
    };

    let public_routes = Router::new()
        .route("/one", get(get_product))
        .route("/list", get(list_products));

    let protected_routes = Router::new()
        .route("/create", post(create_product))
        .route("/update", put(update_product))
        .route("/delete", delete(delete_product))
        .route_layer(middleware::from_fn_with_state(
            token_service,
            auth::gate::authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
