use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;
use super::vitals::VitalSigns;

/// Structured output derived from a consultation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsultationAnalysis {
    pub diagnoses: Vec<String>,
    pub prescriptions: Vec<String>,
    pub action_items: Vec<String>,
    pub follow_up: String,
    pub key_points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vital_signs: Option<VitalSigns>,
    pub urgency: Severity,
    pub confidence: f64,
}
