use std::sync::Arc;

use patterns_core::Clock;
use patterns_core::dataset::QuestionDataset;
use storage::repository::Storage;

use crate::analytics::{AnalyticsConfig, AnalyticsService};
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::visibility_service::PatternVisibilityService;

/// Everything the UI needs, wired against one storage backend.
#[derive(Clone)]
pub struct AppServices {
    pub dataset: Arc<QuestionDataset>,
    pub progress: Arc<ProgressService>,
    pub visibility: Arc<PatternVisibilityService>,
    pub analytics: Arc<AnalyticsService>,
}

impl AppServices {
    /// Builds services over a dataset and storage backend. Progress is
    /// loaded and reconciled here so the UI always starts from a state
    /// sized to the dataset.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the initial progress load fails.
    pub async fn bootstrap(
        dataset: Arc<QuestionDataset>,
        storage: &Storage,
        analytics_config: Option<AnalyticsConfig>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let progress = Arc::new(
            ProgressService::load(Arc::clone(&dataset), Arc::clone(&storage.progress)).await?,
        );
        let visibility = Arc::new(PatternVisibilityService::new(Arc::clone(
            &storage.visibility,
        )));
        let analytics = Arc::new(AnalyticsService::new(analytics_config, clock));

        Ok(Self {
            dataset,
            progress,
            visibility,
            analytics,
        })
    }
}
