//! HTTP API handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;

use crate::calc::{self, CalculationResponse};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::metrics;
use crate::users::{seed_users, User};

/// Service version reported by the greeting and health endpoints.
pub const VERSION: &str = "1.0.0";

/// Application state shared with handlers.
///
/// Everything here is immutable after startup, so handlers need no
/// locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable configuration.
    pub config: Arc<Config>,
    /// Static user list, seeded once.
    pub users: Arc<Vec<User>>,
}

impl AppState {
    /// Create new app state from configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(seed_users()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Greeting response for the root endpoint.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    /// Fixed welcome message.
    pub message: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Deployment environment label.
    pub environment: String,
    /// UTC timestamp (RFC 3339).
    pub timestamp: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// UTC timestamp (RFC 3339).
    pub timestamp: String,
}

/// Current UTC time as an RFC 3339 string.
fn utc_timestamp() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Greeting handler - basic service info.
pub async fn home(State(state): State<AppState>) -> Result<Json<GreetingResponse>> {
    metrics::inc_requests("home");

    Ok(Json(GreetingResponse {
        message: "Hello from the CI sample service!",
        version: VERSION,
        environment: state.config.environment.clone(),
        timestamp: utc_timestamp()?,
    }))
}

/// Health check handler - always returns 200 without touching any
/// external resource.
pub async fn health() -> Result<Json<HealthResponse>> {
    metrics::inc_requests("health");

    Ok(Json(HealthResponse {
        status: "healthy",
        version: VERSION,
        timestamp: utc_timestamp()?,
    }))
}

/// User list handler - returns the static three-record list.
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<User>> {
    metrics::inc_requests("users");

    Json(state.users.as_ref().clone())
}

/// Calculator handler.
///
/// Reads the raw body rather than using the `Json` extractor so that
/// absent or malformed bodies map onto the service's own error messages
/// instead of the framework's rejection text.
pub async fn calculate(body: Bytes) -> Result<Json<CalculationResponse>> {
    metrics::inc_requests("calculate");

    let request = calc::parse_request(&body).inspect_err(|e| {
        metrics::inc_calculations_failed();
        debug!("calculation rejected: {e}");
    })?;

    let response = calc::calculate(&request).inspect_err(|_| {
        metrics::inc_calculations_failed();
    })?;

    metrics::inc_calculations();
    debug!("calculated: {}", response.operation);

    Ok(Json(response))
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
