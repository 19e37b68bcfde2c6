use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Vital signs pulled out of free text. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blood_pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub heart_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<String>,
}

impl VitalSigns {
    pub fn is_empty(&self) -> bool {
        self.blood_pressure.is_none()
            && self.heart_rate.is_none()
            && self.temperature.is_none()
            && self.weight.is_none()
    }
}
