use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::codec;
use crate::repository::{PatternVisibilityRepository, ProgressRepository, StorageError};

use super::SqliteRepository;

impl SqliteRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO kv (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_checked(&self) -> Result<Option<Vec<bool>>, StorageError> {
        let raw = self.get_value(codec::CHECKED_KEY).await?;
        Ok(raw.as_deref().and_then(codec::decode_checked))
    }

    async fn save_checked(&self, flags: &[bool]) -> Result<(), StorageError> {
        self.put_value(codec::CHECKED_KEY, &codec::encode_checked(flags))
            .await
    }
}

#[async_trait]
impl PatternVisibilityRepository for SqliteRepository {
    async fn load_show_patterns(&self) -> Result<Option<bool>, StorageError> {
        let raw = self.get_value(codec::SHOW_PATTERNS_KEY).await?;
        Ok(raw.as_deref().and_then(codec::decode_show_patterns))
    }

    async fn save_show_patterns(&self, visible: bool) -> Result<(), StorageError> {
        self.put_value(
            codec::SHOW_PATTERNS_KEY,
            &codec::encode_show_patterns(visible),
        )
        .await
    }
}
