use std::sync::Arc;

use storage::repository::PatternVisibilityRepository;

use crate::error::VisibilityServiceError;

/// Persists and exposes the pattern-column masking flag.
#[derive(Clone)]
pub struct PatternVisibilityService {
    repo: Arc<dyn PatternVisibilityRepository>,
}

impl PatternVisibilityService {
    #[must_use]
    pub fn new(repo: Arc<dyn PatternVisibilityRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted flag; patterns are visible by default when
    /// nothing was persisted or the stored value is malformed.
    ///
    /// # Errors
    ///
    /// Returns `VisibilityServiceError` on storage failures.
    pub async fn get(&self) -> Result<bool, VisibilityServiceError> {
        let visible = self.repo.load_show_patterns().await?;
        Ok(visible.unwrap_or(true))
    }

    /// Persist a new flag value immediately.
    ///
    /// # Errors
    ///
    /// Returns `VisibilityServiceError` if persistence fails.
    pub async fn set(&self, visible: bool) -> Result<(), VisibilityServiceError> {
        self.repo.save_show_patterns(visible).await?;
        Ok(())
    }
}
