use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;

/// The assistant's answer to a free-text health question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub response: String,
    pub severity: Severity,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub follow_up: Option<String>,
}
