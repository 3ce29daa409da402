//! Fixed response bodies shared by handlers and the API document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "Simple API";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const SERVICE_DESCRIPTION: &str = "A simple API designed for infrastructure testing purposes";

pub const DELETED_MESSAGE: &str = "Data deleted successfully";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(example = json!({
    "name": "Simple API",
    "version": "1.0.0",
    "description": "A simple API designed for infrastructure testing purposes"
}))]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl ApiInfo {
    pub fn current() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(example = json!({ "status": "ok" }))]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(example = json!({ "message": "Data deleted successfully" }))]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn deleted() -> Self {
        Self { message: DELETED_MESSAGE.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(example = json!({ "error": "Data not found" }))]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self { error: message.to_string() }
    }
}
