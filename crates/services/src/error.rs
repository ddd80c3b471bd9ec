//! Shared error types for the services crate.

use thiserror::Error;

use patterns_core::dataset::DatasetError;
use patterns_core::progress::ProgressError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("progress state lock poisoned")]
    Poisoned,
}

/// Errors emitted by `PatternVisibilityService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VisibilityServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
}
