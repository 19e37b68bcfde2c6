//! General health query classification.
//!
//! A query is scored twice, independently: once against
//! [`HEALTH_SEVERITY`] for a severity level and once against
//! [`HEALTH_CATEGORIES`] for a topic. The two results are combined by
//! [`assemble_response`].

use medisight_core::models::health::HealthResponse;
use medisight_core::models::severity::Severity;
use tracing::debug;

use crate::keywords::{find_category, KeywordCategory, ResponseTemplate, SeverityVocabulary};

/// Name of the catch-all greeting category. Matching it yields the
/// generic response.
pub const GENERAL_CATEGORY: &str = "general";

pub const ESCALATION_FOLLOW_UP: &str = "⚠️ If symptoms are severe or worsening, please seek immediate medical attention or call emergency services.";
pub const TRACKING_FOLLOW_UP: &str = "Would you like me to help you track this symptom or set up a reminder to check with your doctor?";
pub const GENERIC_FOLLOW_UP: &str = "I can also help you track symptoms over time or set up medication reminders.";

pub const HEALTH_SEVERITY: SeverityVocabulary = SeverityVocabulary {
    high: &["emergency", "severe", "pain", "chest", "breathing", "unconscious"],
    medium: &["dizzy", "fever", "nausea", "headache"],
};

/// Topic table, in match-priority order.
pub static HEALTH_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "sleep",
        keywords: &["sleep", "sleepy", "tired", "insomnia", "cannot sleep", "wake up"],
        responses: &[(
            Severity::Low,
            ResponseTemplate {
                response: "I understand you're having trouble sleeping. This is a common issue that can be caused by stress, caffeine, or irregular sleep patterns.",
                suggestions: &[
                    "Try establishing a regular bedtime routine",
                    "Avoid caffeine 6 hours before bed",
                    "Keep your bedroom cool and dark",
                    "Try relaxation techniques like deep breathing",
                    "Limit screen time 1 hour before bed",
                ],
            },
        )],
    },
    KeywordCategory {
        name: "dizziness",
        keywords: &["dizzy", "dizziness", "vertigo", "lightheaded", "spinning"],
        responses: &[(
            Severity::Medium,
            ResponseTemplate {
                response: "Dizziness can have various causes. It's important to pay attention to when and how often it occurs.",
                suggestions: &[
                    "Sit or lie down immediately when feeling dizzy",
                    "Stay hydrated throughout the day",
                    "Avoid sudden movements",
                    "Check if you've eaten recently (low blood sugar)",
                    "Monitor your blood pressure if you have a history of hypertension",
                ],
            },
        )],
    },
    KeywordCategory {
        name: GENERAL_CATEGORY,
        keywords: &["hi", "hello", "help", "symptoms", "health"],
        responses: &[(
            Severity::Low,
            ResponseTemplate {
                response: "Hello! I'm your AI Health Assistant. I can help you with symptom tracking, health guidance, and medication reminders. What specific health concern would you like to discuss?",
                suggestions: &[
                    "Describe your symptoms in detail",
                    "Tell me about your current medications",
                    "Ask about sleep, diet, or exercise",
                    "Request health tips or reminders",
                ],
            },
        )],
    },
];

const GENERIC_TEMPLATE: ResponseTemplate = ResponseTemplate {
    response: "I'm here to help with your health concerns. Could you tell me more specifically about what you're experiencing? For example, are you having trouble sleeping, feeling dizzy, experiencing pain, or something else?",
    suggestions: &[
        "Be specific about your symptoms",
        "Mention when symptoms started",
        "Describe any triggers or patterns",
        "Share relevant medical history if comfortable",
    ],
};

/// Classify a free-text health query. Deterministic for a given input.
pub fn classify_health_query(text: &str) -> HealthResponse {
    let severity = HEALTH_SEVERITY.estimate(text);
    let category = find_category(HEALTH_CATEGORIES, text);
    assemble_response(category, severity)
}

/// Combine a matched category and an estimated severity into a response.
///
/// No category, the general category, or a category without a usable
/// template all produce the generic response at the given severity.
pub fn assemble_response(category: Option<&KeywordCategory>, severity: Severity) -> HealthResponse {
    let category = category.filter(|c| c.name != GENERAL_CATEGORY);
    let template = category.and_then(|c| c.template(severity));

    if let (Some(category), None) = (category, template) {
        debug!(
            category = category.name,
            severity = %severity,
            "no template for matched category, using generic response"
        );
    }

    match template {
        Some(template) => HealthResponse {
            response: template.response.to_string(),
            severity,
            suggestions: to_owned(template.suggestions),
            follow_up: Some(follow_up(severity, TRACKING_FOLLOW_UP).to_string()),
        },
        None => HealthResponse {
            response: GENERIC_TEMPLATE.response.to_string(),
            severity,
            suggestions: to_owned(GENERIC_TEMPLATE.suggestions),
            follow_up: Some(follow_up(severity, GENERIC_FOLLOW_UP).to_string()),
        },
    }
}

fn follow_up(severity: Severity, otherwise: &'static str) -> &'static str {
    if severity == Severity::High {
        ESCALATION_FOLLOW_UP
    } else {
        otherwise
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
