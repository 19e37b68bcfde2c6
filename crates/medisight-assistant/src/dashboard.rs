use medisight_core::models::dashboard::DashboardReply;
use medisight_triage::dashboard::dashboard_reply;
use tracing::info;

use crate::latency::{Latency, LatencyProfile, TokioLatency};

/// Clinician dashboard chat panel.
#[derive(Debug, Clone, Default)]
pub struct DashboardAssistant<L = TokioLatency> {
    latency: L,
    profile: LatencyProfile,
}

impl<L: Latency> DashboardAssistant<L> {
    pub fn new(latency: L, profile: LatencyProfile) -> Self {
        Self { latency, profile }
    }

    pub async fn query(&self, query: &str) -> DashboardReply {
        self.latency.delay(self.profile.dashboard_query).await;

        let reply = dashboard_reply(query);
        info!(intent = ?reply.intent, "dashboard query answered");
        reply
    }
}
