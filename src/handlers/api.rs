//! Service info and liveness. Neither touches the store.

use crate::response::{ApiInfo, HealthStatus};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api",
    tag = "API",
    summary = "Get application information",
    description = "Returns basic information about the API",
    responses((status = 200, description = "Application information retrieved successfully", body = ApiInfo))
)]
pub async fn info() -> Json<ApiInfo> {
    Json(ApiInfo::current())
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "API",
    summary = "Check API health status",
    description = "Returns the health status of the application",
    responses((status = 200, description = "Health status retrieved successfully", body = HealthStatus))
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
