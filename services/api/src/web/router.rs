//! services/api/src/web/router.rs
//!
//! Assembles the Axum router: public routes, API-key protected routes and the
//! Swagger UI.

use crate::{
    error::ErrorBody,
    web::{
        middleware::require_api_key,
        rest::{quiz_handler, root_handler, summary_handler, ApiDoc},
        state::AppState,
    },
};
use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::{any::Any, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the complete application router around the shared state.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Public routes (no auth required)
    let public_routes: Router<Arc<AppState>> = Router::new().route("/", get(root_handler));

    // Protected routes (API key required). `route_layer` keeps unknown paths at 404.
    let protected_routes = Router::new()
        .route("/summary", get(summary_handler))
        .route("/summary/", get(summary_handler))
        .route("/quiz", get(quiz_handler).post(quiz_handler))
        .route("/quiz/", get(quiz_handler).post(quiz_handler))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_api_key,
        ));

    let api_router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    with_panic_handler(app)
}

/// Turns a panicking handler into a 500 with the generic error body.
fn with_panic_handler(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(panic = %message, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: "An internal server error occurred.".to_string(),
        }),
    )
        .into_response()
}
