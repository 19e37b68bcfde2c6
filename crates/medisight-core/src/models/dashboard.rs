use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What a dashboard chat query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DashboardIntent {
    Vitals,
    Medication,
    Appointment,
    Analytics,
    Clinical,
    General,
}

/// Canned reply from the dashboard chat panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardReply {
    pub intent: DashboardIntent,
    pub message: String,
    /// Widget payload rendered by the UI; `null` when the intent has none.
    pub data: serde_json::Value,
}
