//! medisight-assistant
//!
//! Async service layer over the rule-based classifiers. Every operation
//! that stands in for a remote AI or transcription call waits on an
//! injectable [`latency::Latency`] before resolving.

pub mod audit;
pub mod consultation;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod latency;

pub use consultation::ConsultationService;
pub use dashboard::DashboardAssistant;
pub use health::HealthAssistant;
pub use latency::{Latency, LatencyProfile, NoLatency, TokioLatency};
