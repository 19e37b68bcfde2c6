use serde::Serialize;
use tracing::info;

/// A structured audit event for consultation changes.
///
/// Emitted through `tracing`, so it lands wherever the subscriber sends
/// the rest of the logs.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            details: None,
        }
    }

    /// Shorthand for an event on a consultation record.
    pub fn consultation(action: impl Into<String>, id: uuid::Uuid) -> Self {
        Self::new(action, "consultation", id.to_string())
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Log the event at `info`. `audit.details` is only recorded when set.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.details = self.details.as_ref().map(tracing::field::display),
            "audit event"
        );
    }
}
