//! Clinician dashboard chat: routes a query to one of the dashboard widgets.

use medisight_core::models::dashboard::{DashboardIntent, DashboardReply};
use serde_json::json;

use crate::keywords::contains_any;

/// Intent triggers, in match-priority order. Anything else is `General`.
pub static INTENT_KEYWORDS: &[(DashboardIntent, &[&str])] = &[
    (DashboardIntent::Vitals, &["vitals", "blood pressure", "heart rate"]),
    (DashboardIntent::Medication, &["medication", "drug", "prescription"]),
    (DashboardIntent::Appointment, &["appointment", "schedule", "booking"]),
    (DashboardIntent::Analytics, &["analytics", "insights", "trends"]),
    (DashboardIntent::Clinical, &["patient", "diagnosis", "treatment"]),
];

pub fn detect_intent(query: &str) -> DashboardIntent {
    let lowered = query.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&lowered, keywords))
        .map_or(DashboardIntent::General, |(intent, _)| *intent)
}

/// Build the canned reply for a dashboard query.
pub fn dashboard_reply(query: &str) -> DashboardReply {
    let intent = detect_intent(query);
    let (message, data) = match intent {
        DashboardIntent::Vitals => (
            "Here are the latest vital signs for your patients:".to_string(),
            json!({
                "patients": [
                    { "name": "John Doe", "bp": "140/90", "hr": 78, "temp": 98.6, "status": "warning" },
                    { "name": "Jane Smith", "bp": "120/80", "hr": 72, "temp": 98.4, "status": "normal" },
                    { "name": "Robert Johnson", "bp": "135/85", "hr": 85, "temp": 99.1, "status": "elevated" },
                ]
            }),
        ),
        DashboardIntent::Medication => (
            "Medication adherence and interaction analysis:".to_string(),
            json!({
                "adherence": 87,
                "interactions": 2,
                "medications": [
                    { "name": "Metformin", "adherence": 95, "patients": 45 },
                    { "name": "Lisinopril", "adherence": 89, "patients": 32 },
                    { "name": "Atorvastatin", "adherence": 78, "patients": 28 },
                ]
            }),
        ),
        DashboardIntent::Appointment => (
            "Appointment scheduling and availability:".to_string(),
            json!({
                "today": 12,
                "this_week": 45,
                "next_available": "2024-01-20 10:00 AM",
                "upcoming": [
                    { "patient": "Alice Brown", "time": "2:00 PM", "type": "Follow-up" },
                    { "patient": "Michael Davis", "time": "3:30 PM", "type": "New Patient" },
                ]
            }),
        ),
        DashboardIntent::Analytics => (
            "Practice analytics and insights:".to_string(),
            json!({
                "total_patients": 1247,
                "monthly_growth": 12,
                "top_conditions": ["Hypertension", "Diabetes", "Asthma"],
                "revenue": { "current": 125000, "growth": 8.5 },
            }),
        ),
        DashboardIntent::Clinical => (
            "Based on the clinical data, I can help you with patient management. Here are some key insights:\n\n\
             • 15 patients are due for follow-up appointments\n\
             • 3 patients have elevated blood pressure readings\n\
             • Medication adherence is at 87% across the practice\n\
             • Next available appointment slot is tomorrow at 10:00 AM\n\n\
             Would you like me to provide more specific information about any of these areas?"
                .to_string(),
            serde_json::Value::Null,
        ),
        DashboardIntent::General => (
            format!(
                "I understand you're asking about: \"{query}\". I can help you with:\n\n\
                 • Patient vitals and health monitoring\n\
                 • Medication management and interactions\n\
                 • Appointment scheduling and availability\n\
                 • Practice analytics and insights\n\
                 • Clinical decision support\n\n\
                 Please be more specific about what you'd like to know, and I'll provide detailed information."
            ),
            serde_json::Value::Null,
        ),
    };

    DashboardReply {
        intent,
        message,
        data,
    }
}
