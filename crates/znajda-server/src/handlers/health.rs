//! Liveness endpoint.

use axum::{Json, extract::State};

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Liveness check.
///
/// Always answers `status: "healthy"` together with the crate version
/// compiled into the binary, without touching the catalog lock.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check(
    State(_state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
