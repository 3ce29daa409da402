//! Record Store: persistence of [`Data`] entries behind the [`DataStore`] trait.
//!
//! Absence is reported as `Ok(None)`, never as an error. An id that is not a
//! hyphenated UUID cannot name a record, so it is treated the same as an absent one.

pub mod memory;
pub mod postgres;

use crate::error::AppError;
use crate::model::Data;
use async_trait::async_trait;
use std::cmp::Ordering;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgDataStore;

#[async_trait]
pub trait DataStore: Send + Sync {
    /// All records, newest `created_at` first; ties broken by descending `id`.
    async fn list_all(&self) -> Result<Vec<Data>, AppError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Data>, AppError>;

    /// Insert a record with a generated id; `created_at == updated_at`.
    async fn create(&self, value: &str) -> Result<Data, AppError>;

    /// Replace `value` and refresh `updated_at`. Returns `None` when the id is absent.
    async fn update(&self, id: &str, value: &str) -> Result<Option<Data>, AppError>;

    /// Hard delete. Returns the removed record, or `None` when the id is absent.
    async fn delete(&self, id: &str) -> Result<Option<Data>, AppError>;
}

/// Parse a path id. Only the canonical 36-character form is accepted.
pub fn parse_id(id: &str) -> Option<Uuid> {
    if id.len() != 36 {
        return None;
    }
    Uuid::try_parse(id).ok()
}

/// List order shared by every store. Matches `ORDER BY created_at DESC, id DESC`.
pub fn newest_first(a: &Data, b: &Data) -> Ordering {
    b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn row(id: &str, created_at: DateTime<Utc>) -> Data {
        Data {
            id: Uuid::parse_str(id).unwrap(),
            value: "v".into(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn newest_first_breaks_ties_by_id() {
        let now = Utc::now();
        let low = row("00000000-0000-4000-8000-000000000001", now);
        let high = row("ffffffff-0000-4000-8000-000000000001", now);
        let older = row("88888888-0000-4000-8000-000000000001", now - Duration::seconds(1));

        let mut rows = vec![older.clone(), low.clone(), high.clone()];
        rows.sort_by(newest_first);
        assert_eq!(rows, vec![high, low, older]);
    }

    #[test]
    fn parses_hyphenated_ids_only() {
        let id = "123e4567-e89b-12d3-a456-426614174000";
        assert_eq!(parse_id(id).map(|u| u.to_string()), Some(id.to_string()));
        assert!(parse_id("123E4567-E89B-12D3-A456-426614174000").is_some());
        assert!(parse_id("not-a-uuid").is_none());
        assert!(parse_id("123e4567e89b12d3a456426614174000").is_none());
        assert!(parse_id("").is_none());
    }
}
