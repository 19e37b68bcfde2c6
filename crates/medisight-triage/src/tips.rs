/// General wellness tips shown alongside the assistant.
pub const HEALTH_TIPS: &[&str] = &[
    "Stay hydrated by drinking 8 glasses of water daily",
    "Get 7-9 hours of quality sleep each night",
    "Eat a balanced diet with fruits and vegetables",
    "Exercise for at least 30 minutes most days",
    "Manage stress through meditation or deep breathing",
    "Wash your hands regularly to prevent illness",
    "Get regular health check-ups and screenings",
];

pub fn health_tips() -> Vec<String> {
    HEALTH_TIPS.iter().map(|tip| tip.to_string()).collect()
}

/// Format a reminder for a recurring health task, e.g. `("Take Metformin", "8:00 AM")`.
pub fn health_reminder(kind: &str, time: &str) -> String {
    format!("🔔 Health Reminder: {kind} at {time}. Your health is important - don't skip this!")
}
