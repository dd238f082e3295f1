//! HTTP API route definitions.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{calculate, get_users, health, home, not_found, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Informational endpoints
        .route("/", get(home))
        .route("/health", get(health))
        // API endpoints
        .route("/api/users", get(get_users))
        .route("/api/calculate", post(calculate))
        // Everything else is a 404 with the uniform error body
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
