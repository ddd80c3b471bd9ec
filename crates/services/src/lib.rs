#![forbid(unsafe_code)]

pub mod analytics;
pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod visibility_service;

pub use patterns_core::Clock;

pub use analytics::{AnalyticsConfig, AnalyticsService};
pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError, VisibilityServiceError};
pub use progress_service::{ProgressService, ProgressSnapshot, ToggleOutcome};
pub use visibility_service::PatternVisibilityService;
