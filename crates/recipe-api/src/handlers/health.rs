//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode};
use recipe_service::dto::{HealthResponse, ReadinessResponse};

use crate::response::ApiJson;
use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health, GET /healthcheck
pub async fn health_check() -> ApiJson<HealthResponse> {
    ApiJson(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, ApiJson<ReadinessResponse>) {
    let db_healthy = state.service_context().pool().acquire().await.is_ok();

    let response = ReadinessResponse::ready(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, ApiJson(response))
}
