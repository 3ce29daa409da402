//! Bootstrap of the `data` table. Run once before the server accepts traffic.
//! Idempotent: existing tables and rows are left untouched.

use crate::error::AppError;
use crate::model::DATA_TABLE;
use sqlx::PgPool;

pub async fn ensure_data_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            value TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        DATA_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;

    let index = format!(
        "CREATE INDEX IF NOT EXISTS {0}_created_at_idx ON {0} (created_at DESC)",
        DATA_TABLE
    );
    sqlx::query(&index).execute(pool).await?;
    Ok(())
}
