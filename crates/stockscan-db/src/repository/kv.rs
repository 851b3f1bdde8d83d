//! # Key-Value Repository
//!
//! Local key-value storage on top of the `kv_store` table.
//!
//! Writes are upserts: setting an existing key overwrites its value and
//! bumps `updated_at`. There is no history.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// A stored value with its last write time.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Repository for key-value operations.
#[derive(Debug, Clone)]
pub struct KeyValueRepository {
    pool: SqlitePool,
}

impl KeyValueRepository {
    /// Creates a new KeyValueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KeyValueRepository { pool }
    }

    /// Reads the value stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key never written (or deleted)
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        debug!(key = %key, found = value.is_some(), "kv get");
        Ok(value)
    }

    /// Reads the full entry stored under `key`.
    pub async fn get_entry(&self, key: &str) -> DbResult<Option<KeyValueEntry>> {
        let entry = sqlx::query_as::<_, KeyValueEntry>(
            "SELECT key, value, updated_at FROM kv_store WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Writes `value` under `key`, replacing any prior value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "kv set");

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes `key`.
    ///
    /// ## Returns
    /// `true` if a value was removed.
    pub async fn delete(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every stored key, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_get_missing_key() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.kv().get("nothing").await.unwrap(), None);
        assert!(db.kv().get_entry("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let kv = db.kv();

        kv.set("inventory", "[]").await.unwrap();
        let first = kv.get_entry("inventory").await.unwrap().unwrap();

        kv.set("inventory", r#"[{"id":"A","name":"B","quantity":1}]"#)
            .await
            .unwrap();
        let second = kv.get_entry("inventory").await.unwrap().unwrap();

        assert_eq!(first.value, "[]");
        assert_eq!(second.value, r#"[{"id":"A","name":"B","quantity":1}]"#);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(kv.keys().await.unwrap(), vec!["inventory".to_string()]);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let kv = db.kv();

        kv.set("b", "2").await.unwrap();
        kv.set("a", "1").await.unwrap();
        assert_eq!(kv.keys().await.unwrap(), vec!["a".to_string(), "b".to_string()]);

        assert!(kv.delete("a").await.unwrap());
        assert!(!kv.delete("a").await.unwrap());
        assert_eq!(kv.get("a").await.unwrap(), None);
        assert_eq!(kv.get("b").await.unwrap(), Some("2".to_string()));
    }
}
