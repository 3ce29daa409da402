//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

pub const NOT_FOUND_MESSAGE: &str = "Data not found";
pub const VALIDATION_MESSAGE: &str = "Value is required and cannot be empty";
pub const INTERNAL_MESSAGE: &str = "Internal server error";
pub const TOO_LARGE_MESSAGE: &str = "Request entity too large";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Clients only ever see the fixed messages; detail stays in the log.
        let message = match &self {
            AppError::NotFound(id) => {
                tracing::debug!(id = %id, "data not found");
                NOT_FOUND_MESSAGE
            }
            AppError::Validation(reason) => {
                tracing::debug!(reason = %reason, "rejected request body");
                VALIDATION_MESSAGE
            }
            AppError::PayloadTooLarge(reason) => {
                tracing::debug!(reason = %reason, "rejected oversized body");
                TOO_LARGE_MESSAGE
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, details = ?e, "store operation failed");
                INTERNAL_MESSAGE
            }
        };
        (self.status(), Json(ErrorBody::new(message))).into_response()
    }
}
