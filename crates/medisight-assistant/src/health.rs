use medisight_core::models::health::HealthResponse;
use medisight_triage::health::classify_health_query;
use medisight_triage::tips;
use tracing::info;

use crate::latency::{Latency, LatencyProfile, TokioLatency};

/// Patient-facing health assistant.
#[derive(Debug, Clone, Default)]
pub struct HealthAssistant<L = TokioLatency> {
    latency: L,
    profile: LatencyProfile,
}

impl<L: Latency> HealthAssistant<L> {
    pub fn new(latency: L, profile: LatencyProfile) -> Self {
        Self { latency, profile }
    }

    /// Answer a free-text health question.
    ///
    /// The answer depends only on `query`; only the time to resolve varies.
    pub async fn process_health_query(&self, query: &str) -> HealthResponse {
        self.latency.delay(self.profile.health_query).await;

        let response = classify_health_query(query);
        info!(
            severity = %response.severity,
            suggestions = response.suggestions.len(),
            "health query answered"
        );
        response
    }

    pub fn health_tips(&self) -> Vec<String> {
        tips::health_tips()
    }

    pub fn health_reminder(&self, kind: &str, time: &str) -> String {
        tips::health_reminder(kind, time)
    }
}
