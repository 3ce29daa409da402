//! Documentation routes and the root redirect.

use crate::docs::{DOCS_PATH, OPENAPI_JSON_PATH};
use crate::handlers::docs::{openapi_json, root, ui};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn docs_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(DOCS_PATH, get(ui))
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .with_state(state)
}
