//! Health check handler

use axum::Json;
use utoipa::ToSchema;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_i64)]
    pub timestamp_ms: i64,
}

/// Health check endpoint
///
/// Liveness only: does not touch the signs root.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service alive", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp_ms: chrono::Utc::now().timestamp_millis(),
    })
}
