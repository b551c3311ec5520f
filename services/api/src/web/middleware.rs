//! services/api/src/web/middleware.rs
//!
//! Authentication middleware for protecting routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

use crate::{error::ApiError, web::state::AppState};

/// The header carrying the pre-shared API key.
pub const API_KEY_HEADER: &str = "api-key";

/// Middleware that compares the `API-Key` header against the configured secret.
///
/// Runs before any query parsing, so a bad key yields 403 regardless of the
/// other parameters.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided != Some(state.config.api_key.as_str()) {
        warn!(path = %req.uri().path(), "Rejected request without a valid API key");
        return Err(ApiError::Forbidden(
            "You must authenticate using a valid API Key in the 'API-Key' header.".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
