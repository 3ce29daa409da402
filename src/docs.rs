//! OpenAPI description of the HTTP surface. The document is static except for
//! `servers`, which is filled in from the requesting origin.

use crate::handlers;
use crate::model::{Data, DataInput};
use crate::response::{ApiInfo, ErrorBody, HealthStatus, MessageBody};
use axum::http::{header, HeaderMap};
use utoipa::openapi::server::ServerBuilder;
use utoipa::OpenApi;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

const FORWARDED_PROTO: &str = "x-forwarded-proto";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple API",
        version = "1.0.0",
        description = "A simple API designed for infrastructure testing purposes",
        contact(name = "API Support", email = "support@example.com")
    ),
    paths(
        handlers::api::info,
        handlers::api::health,
        handlers::data::list,
        handlers::data::read,
        handlers::data::create,
        handlers::data::update,
        handlers::data::delete,
    ),
    components(schemas(Data, DataInput, ApiInfo, HealthStatus, MessageBody, ErrorBody)),
    tags(
        (name = "API", description = "Service information"),
        (name = "Data", description = "Data entry management"),
    )
)]
pub struct ApiDoc;

/// Build the document with a single server entry pointing at `origin`.
pub fn openapi_for(origin: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![ServerBuilder::new()
        .url(origin)
        .description(Some("Current server"))
        .build()]);
    doc
}

/// `scheme://host` as seen by the client. Honors `X-Forwarded-Proto` from a fronting proxy.
pub fn request_origin(headers: &HeaderMap, fallback_host: &str) -> String {
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback_host);
    format!("{}://{}", scheme, host)
}

/// Swagger UI shell; the renderer is loaded from a CDN and reads [`OPENAPI_JSON_PATH`].
pub const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Simple API Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  <style>.swagger-ui .topbar { display: none }</style>
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;
