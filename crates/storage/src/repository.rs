use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::codec;

/// Errors surfaced by storage adapters.
///
/// Malformed persisted values are not errors: the codec collapses them to
/// "absent" and repositories report `Ok(None)`, so this enum only covers
/// connection and query failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for per-question completion flags.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted flag sequence.
    ///
    /// Returns `None` when nothing was persisted yet or the stored value is
    /// malformed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or query failures.
    async fn load_checked(&self) -> Result<Option<Vec<bool>>, StorageError>;

    /// Persist the full flag sequence, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn save_checked(&self, flags: &[bool]) -> Result<(), StorageError>;
}

/// Repository contract for the pattern-column visibility flag.
#[async_trait]
pub trait PatternVisibilityRepository: Send + Sync {
    /// Fetch the persisted flag, `None` when absent or malformed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or query failures.
    async fn load_show_patterns(&self) -> Result<Option<bool>, StorageError>;

    /// Persist the flag, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn save_show_patterns(&self, visible: bool) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Stores the same JSON text the SQLite backend stores, so the codec path
/// is exercised either way.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seeds a raw entry, useful for staging stale or malformed values in
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Reads a raw entry back, useful for asserting on persisted text.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_checked(&self) -> Result<Option<Vec<bool>>, StorageError> {
        let raw = self.get_raw(codec::CHECKED_KEY)?;
        Ok(raw.as_deref().and_then(codec::decode_checked))
    }

    async fn save_checked(&self, flags: &[bool]) -> Result<(), StorageError> {
        self.put_raw(codec::CHECKED_KEY, &codec::encode_checked(flags))
    }
}

#[async_trait]
impl PatternVisibilityRepository for InMemoryRepository {
    async fn load_show_patterns(&self) -> Result<Option<bool>, StorageError> {
        let raw = self.get_raw(codec::SHOW_PATTERNS_KEY)?;
        Ok(raw.as_deref().and_then(codec::decode_show_patterns))
    }

    async fn save_show_patterns(&self, visible: bool) -> Result<(), StorageError> {
        self.put_raw(
            codec::SHOW_PATTERNS_KEY,
            &codec::encode_show_patterns(visible),
        )
    }
}

/// Aggregates the repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub visibility: Arc<dyn PatternVisibilityRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let visibility: Arc<dyn PatternVisibilityRepository> = Arc::new(repo);
        Self {
            progress,
            visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_checked_flags() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.load_checked().await.unwrap(), None);

        repo.save_checked(&[true, false, true]).await.unwrap();
        assert_eq!(
            repo.load_checked().await.unwrap(),
            Some(vec![true, false, true])
        );
        assert_eq!(
            repo.get_raw(codec::CHECKED_KEY).unwrap().as_deref(),
            Some("[true,false,true]")
        );
    }

    #[tokio::test]
    async fn malformed_checked_loads_as_absent() {
        let repo = InMemoryRepository::new();
        repo.put_raw(codec::CHECKED_KEY, "{broken").unwrap();
        assert_eq!(repo.load_checked().await.unwrap(), None);
    }

    #[tokio::test]
    async fn round_trips_show_patterns() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.load_show_patterns().await.unwrap(), None);

        repo.save_show_patterns(false).await.unwrap();
        assert_eq!(repo.load_show_patterns().await.unwrap(), Some(false));
    }
}
