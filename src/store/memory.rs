//! In-process [`DataStore`] used by tests and for running without a database.

use super::{newest_first, parse_id, DataStore};
use crate::error::AppError;
use crate::model::Data;
use crate::validation::validate_value;
use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Records kept in insertion order; listing sorts with [`newest_first`].
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Data>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// Same precision as a TIMESTAMPTZ column.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Data>, AppError> {
        let mut out = self.rows.read().await.clone();
        out.sort_by(newest_first);
        Ok(out)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Data>, AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|d| d.id == id).cloned())
    }

    async fn create(&self, value: &str) -> Result<Data, AppError> {
        validate_value(value)?;
        let mut rows = self.rows.write().await;
        // Creation times are strictly increasing so list order never falls back to the id tiebreak.
        let ts = match rows.iter().map(|d| d.created_at).max() {
            Some(last) => now().max(last + Duration::microseconds(1)),
            None => now(),
        };
        let row = Data {
            id: Uuid::new_v4(),
            value: value.to_string(),
            created_at: ts,
            updated_at: ts,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &str, value: &str) -> Result<Option<Data>, AppError> {
        validate_value(value)?;
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        row.value = value.to_string();
        row.updated_at = now().max(row.updated_at + Duration::microseconds(1));
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Data>, AppError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let mut rows = self.rows.write().await;
        let pos = rows.iter().position(|d| d.id == id);
        Ok(pos.map(|i| rows.remove(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get_returns_same_record() {
        let store = MemoryStore::new();
        let created = store.create("hello").await.unwrap();
        assert_eq!(created.value, "hello");
        assert_eq!(created.created_at, created.updated_at);
        let fetched = store.get_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn update_moves_updated_at_forward() {
        let store = MemoryStore::new();
        let created = store.create("hello").await.unwrap();
        let updated = store
            .update(&created.id.to_string(), "world")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.value, "world");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn blank_values_are_rejected_and_nothing_is_stored() {
        let store = MemoryStore::new();
        assert!(matches!(store.create("   ").await, Err(AppError::Validation(_))));
        assert!(store.list_all().await.unwrap().is_empty());

        let created = store.create("keep").await.unwrap();
        let r = store.update(&created.id.to_string(), "").await;
        assert!(matches!(r, Err(AppError::Validation(_))));
        let still = store.get_by_id(&created.id.to_string()).await.unwrap().unwrap();
        assert_eq!(still.value, "keep");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryStore::new();
        let a = store.create("a").await.unwrap();
        let b = store.create("b").await.unwrap();
        let c = store.create("c").await.unwrap();
        let ids: Vec<Uuid> = store.list_all().await.unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);
    }

    #[tokio::test]
    async fn rapid_creates_never_share_a_timestamp() {
        let store = MemoryStore::new();
        let mut created = Vec::new();
        for i in 0..50 {
            created.push(store.create(&format!("v{i}")).await.unwrap());
        }
        for pair in created.windows(2) {
            assert!(pair[1].created_at > pair[0].created_at);
        }
        let listed: Vec<Uuid> = store.list_all().await.unwrap().into_iter().map(|d| d.id).collect();
        let expected: Vec<Uuid> = created.iter().rev().map(|d| d.id).collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemoryStore::new();
        let created = store.create("gone").await.unwrap();
        let id = created.id.to_string();
        assert_eq!(store.delete(&id).await.unwrap(), Some(created));
        assert_eq!(store.get_by_id(&id).await.unwrap(), None);
        assert_eq!(store.delete(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_and_unknown_ids_are_absent() {
        let store = MemoryStore::new();
        store.create("x").await.unwrap();
        assert_eq!(store.get_by_id("not-a-uuid").await.unwrap(), None);
        assert_eq!(store.update("not-a-uuid", "y").await.unwrap(), None);
        assert_eq!(store.delete("not-a-uuid").await.unwrap(), None);
        let unknown = Uuid::new_v4().to_string();
        assert_eq!(store.get_by_id(&unknown).await.unwrap(), None);
        assert_eq!(store.update(&unknown, "y").await.unwrap(), None);
    }
}
