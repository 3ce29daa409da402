//! Documentation endpoints: Swagger UI page, OpenAPI JSON, and the root redirect.

use crate::docs::{openapi_for, request_origin, DOCS_PATH, SWAGGER_UI_HTML};
use crate::state::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, Redirect},
    Json,
};

pub async fn ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

pub async fn openapi_json(State(state): State<AppState>, headers: HeaderMap) -> Json<utoipa::openapi::OpenApi> {
    let origin = request_origin(&headers, &state.fallback_host);
    Json(openapi_for(&origin))
}

pub async fn root() -> Redirect {
    Redirect::temporary(DOCS_PATH)
}
