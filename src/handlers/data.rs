//! Data CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{Data, DataInput};
use crate::response::{ErrorBody, MessageBody};
use crate::state::AppState;
use crate::validation::RequestValidator;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Accept any body shape; anything unusable is a validation failure rather than an
/// extractor rejection. Bodies cut off by the size limit stay a 413.
fn input_from(body: Result<Json<Value>, JsonRejection>) -> Result<DataInput, AppError> {
    let Json(body) = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::Validation(e.body_text())
        }
    })?;
    RequestValidator::data_input(body)
}

#[utoipa::path(
    get,
    path = "/api/data",
    tag = "Data",
    summary = "Get all data entries",
    description = "Retrieve all data entries from the database, newest first",
    responses(
        (status = 200, description = "List of all data entries", body = Vec<Data>),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Data>>, AppError> {
    let rows = state.store.list_all().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/data/{id}",
    tag = "Data",
    summary = "Get data by ID",
    description = "Retrieve a specific data entry by its UUID",
    params(("id" = uuid::Uuid, Path, description = "The data UUID")),
    responses(
        (status = 200, description = "Data entry found", body = Data),
        (status = 404, description = "Data not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn read(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Data>, AppError> {
    let row = state
        .store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(id))?;
    Ok(Json(row))
}

#[utoipa::path(
    post,
    path = "/api/data",
    tag = "Data",
    summary = "Create new data entry",
    description = "Create a new data entry with auto-generated UUID",
    request_body = DataInput,
    responses(
        (status = 201, description = "Data created successfully", body = Data),
        (status = 400, description = "Bad request - validation error", body = ErrorBody),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = input_from(body)?;
    let row = state.store.create(&input.value).await?;
    tracing::info!(id = %row.id, "data created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    put,
    path = "/api/data/{id}",
    tag = "Data",
    summary = "Update data entry",
    description = "Update an existing data entry by its UUID",
    params(("id" = uuid::Uuid, Path, description = "The data UUID")),
    request_body = DataInput,
    responses(
        (status = 200, description = "Data updated successfully", body = Data),
        (status = 400, description = "Bad request - validation error", body = ErrorBody),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 404, description = "Data not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Data>, AppError> {
    // Body is checked before existence: a blank value on an unknown id is a 400.
    let input = input_from(body)?;
    let row = state
        .store
        .update(&id, &input.value)
        .await?
        .ok_or_else(|| AppError::NotFound(id))?;
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/data/{id}",
    tag = "Data",
    summary = "Delete data entry",
    description = "Delete a specific data entry by its UUID",
    params(("id" = uuid::Uuid, Path, description = "The data UUID")),
    responses(
        (status = 200, description = "Data deleted successfully", body = MessageBody),
        (status = 404, description = "Data not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<MessageBody>, AppError> {
    let removed = state
        .store
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(id))?;
    tracing::info!(id = %removed.id, "data deleted");
    Ok(Json(MessageBody::deleted()))
}
