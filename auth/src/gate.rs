use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::principal::Principal;
use crate::token::TokenError;
use crate::token::TokenService;

/// Middleware guarding protected routes.
///
/// Extracts the bearer token, verifies it, and stores the resolved
/// [`Principal`] in request extensions before running the downstream handler.
/// The downstream response is forwarded unchanged. Stateless per request; the
/// only shared state is the read-only token service.
///
/// Attach with `middleware::from_fn_with_state(token_service, authenticate)`.
pub async fn authenticate(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        (StatusCode::UNAUTHORIZED, "Missing Auth token").into_response()
    })?;

    let principal = tokens.verify(token).map_err(|e| match e {
        TokenError::Expired => (StatusCode::UNAUTHORIZED, "token expired").into_response(),
        TokenError::Unverifiable | TokenError::Malformed(_) | TokenError::SigningFailed(_) => {
            tracing::warn!(error = %e, "Token verification failed");
            (StatusCode::UNAUTHORIZED, "User Unauthorized").into_response()
        }
    })?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// Returns None for a missing header, a non-UTF8 header, or any scheme other
/// than Bearer.
fn extract_bearer_token(req: &Request) -> Option<&str> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    auth_header.strip_prefix("Bearer ")
}
