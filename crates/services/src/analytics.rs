use std::env;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;

use patterns_core::Clock;

#[derive(Clone, Debug)]
pub struct AnalyticsConfig {
    pub endpoint: String,
}

impl AnalyticsConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("PATTERNS_ANALYTICS_URL").ok()?;
        if endpoint.trim().is_empty() {
            return None;
        }
        Some(Self { endpoint })
    }
}

/// Fire-and-forget usage event emitter.
///
/// Events are best-effort: no response is consumed and every failure is
/// swallowed. Without a configured endpoint the service is a no-op.
#[derive(Clone)]
pub struct AnalyticsService {
    client: Client,
    config: Option<AnalyticsConfig>,
    clock: Clock,
}

#[derive(Debug, Serialize)]
struct EventPayload<'a> {
    category: &'a str,
    action: &'a str,
    label: &'a str,
    sent_at: DateTime<Utc>,
}

impl AnalyticsService {
    #[must_use]
    pub fn new(config: Option<AnalyticsConfig>, clock: Clock) -> Self {
        Self {
            client: Client::new(),
            config,
            clock,
        }
    }

    #[must_use]
    pub fn from_env(clock: Clock) -> Self {
        Self::new(AnalyticsConfig::from_env(), clock)
    }

    /// An emitter that never sends anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None, Clock::default_clock())
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Emit one event. Never fails; send errors and non-success statuses
    /// are ignored.
    pub async fn event(&self, category: &str, action: &str, label: &str) {
        let Some(config) = self.config.as_ref() else {
            return;
        };

        let payload = EventPayload {
            category,
            action,
            label,
            sent_at: self.clock.now(),
        };

        let _ = self
            .client
            .post(&config.endpoint)
            .json(&payload)
            .send()
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_emitter_is_a_no_op() {
        let analytics = AnalyticsService::disabled();
        assert!(!analytics.enabled());
        // Must return without touching the network.
        analytics.event("table", "clicked url", "Two Sum url").await;
    }
}
