//! Router assembly: route groups plus request logging and body limit middleware.

pub mod common;
pub mod data;
pub mod docs;

pub use common::common_routes;
pub use data::data_routes;
pub use docs::docs_routes;

use crate::state::AppState;
use axum::{routing::MethodRouter, Router};
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Largest accepted request body, in bytes.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Full application: `/api`, `/api/data`, `/api-docs`, and `/`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(data_routes(state.clone()))
        .merge(docs_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Register `path` and `path/` with the same handlers.
pub(crate) fn with_trailing_slash<S>(router: Router<S>, path: &str, method_router: MethodRouter<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route(path, method_router.clone())
        .route(&format!("{}/", path), method_router)
}
