use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Source of the artificial wait placed in front of every mock remote call.
pub trait Latency: Send + Sync {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real wall-clock delay on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLatency;

impl Latency for TokioLatency {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Resolves immediately. Used by tests and by `--no-delay`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn delay(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// Per-operation simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyProfile {
    pub health_query: Duration,
    pub transcription: Duration,
    pub analysis: Duration,
    pub dashboard_query: Duration,
}

impl LatencyProfile {
    pub const fn from_millis(
        health_query: u64,
        transcription: u64,
        analysis: u64,
        dashboard_query: u64,
    ) -> Self {
        Self {
            health_query: Duration::from_millis(health_query),
            transcription: Duration::from_millis(transcription),
            analysis: Duration::from_millis(analysis),
            dashboard_query: Duration::from_millis(dashboard_query),
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::from_millis(800, 2000, 1500, 500)
    }
}
