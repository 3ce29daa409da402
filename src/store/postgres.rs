//! PostgreSQL-backed [`DataStore`].

use super::{parse_id, DataStore};
use crate::config::Settings;
use crate::error::AppError;
use crate::model::{Data, DATA_TABLE};
use crate::validation::validate_value;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

const COLUMNS: &str = "id, value, created_at, updated_at";

#[derive(Clone)]
pub struct PgDataStore {
    pool: PgPool,
}

impl PgDataStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a bounded pool. `connect` establishes a first connection, so an
    /// unreachable database fails here rather than on the first request.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.pool.max_connections)
            .min_connections(settings.pool.min_connections)
            .acquire_timeout(settings.pool.acquire_timeout)
            .idle_timeout(settings.pool.idle_timeout)
            .connect_with(settings.connect_options()?)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DataStore for PgDataStore {
    async fn list_all(&self) -> Result<Vec<Data>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY created_at DESC, id DESC", COLUMNS, DATA_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Data>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Data>, AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, DATA_TABLE);
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Data>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, value: &str) -> Result<Data, AppError> {
        validate_value(value)?;
        let sql = format!(
            "INSERT INTO {} (id, value, created_at, updated_at) VALUES ($1, $2, NOW(), NOW()) RETURNING {}",
            DATA_TABLE, COLUMNS
        );
        let id = Uuid::new_v4();
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Data>(&sql)
            .bind(id)
            .bind(value)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: &str, value: &str) -> Result<Option<Data>, AppError> {
        validate_value(value)?;
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        // updated_at must move forward even if NOW() has not advanced past the stored value.
        let sql = format!(
            "UPDATE {} SET value = $2, updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond') \
             WHERE id = $1 RETURNING {}",
            DATA_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Data>(&sql)
            .bind(id)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: &str) -> Result<Option<Data>, AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING {}", DATA_TABLE, COLUMNS);
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Data>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
