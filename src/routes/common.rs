//! Informational routes: service descriptor and liveness.

use super::with_trailing_slash;
use crate::handlers::api::{health, info};
use axum::{routing::get, Router};

/// GET /api (service info) and GET /api/health. No state.
pub fn common_routes() -> Router {
    let router = with_trailing_slash(Router::new(), "/api", get(info));
    with_trailing_slash(router, "/api/health", get(health))
}
