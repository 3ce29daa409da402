//! The `Data` entity and its request shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Table backing [`Data`].
pub const DATA_TABLE: &str = "data";

/// A persisted data entry. `id` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(example = json!({
    "id": "123e4567-e89b-12d3-a456-426614174000",
    "value": "Sample data value",
    "created_at": "2023-01-01T00:00:00.000Z",
    "updated_at": "2023-01-01T00:00:00.000Z"
}))]
pub struct Data {
    /// Auto-generated UUID
    pub id: Uuid,
    /// The data value
    pub value: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Body accepted by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "value": "New data value" }))]
pub struct DataInput {
    /// The data value
    pub value: String,
}
