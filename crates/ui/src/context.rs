use std::sync::Arc;

use patterns_core::dataset::QuestionDataset;
use services::{AnalyticsService, PatternVisibilityService, ProgressService};

pub trait UiApp: Send + Sync {
    fn dataset(&self) -> Arc<QuestionDataset>;
    fn progress(&self) -> Arc<ProgressService>;
    fn visibility(&self) -> Arc<PatternVisibilityService>;
    fn analytics(&self) -> Arc<AnalyticsService>;
}

#[derive(Clone)]
pub struct AppContext {
    dataset: Arc<QuestionDataset>,
    progress: Arc<ProgressService>,
    visibility: Arc<PatternVisibilityService>,
    analytics: Arc<AnalyticsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            dataset: app.dataset(),
            progress: app.progress(),
            visibility: app.visibility(),
            analytics: app.analytics(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<QuestionDataset> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn visibility(&self) -> Arc<PatternVisibilityService> {
        Arc::clone(&self.visibility)
    }

    #[must_use]
    pub fn analytics(&self) -> Arc<AnalyticsService> {
        Arc::clone(&self.analytics)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
