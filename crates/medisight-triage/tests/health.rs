use medisight_core::models::severity::Severity;
use medisight_triage::health::{
    assemble_response, classify_health_query, ESCALATION_FOLLOW_UP, GENERIC_FOLLOW_UP,
    HEALTH_CATEGORIES, HEALTH_SEVERITY, TRACKING_FOLLOW_UP,
};
use medisight_triage::keywords::find_category;

#[test]
fn high_keyword_dominates_everything_else() {
    for text in [
        "This is an emergency",
        "I feel dizzy and have a severe headache",
        "I can't sleep because of back pain",
        "trouble BREATHING at night",
        "hello, my chest feels tight",
    ] {
        let response = classify_health_query(text);
        assert_eq!(response.severity, Severity::High, "query: {text}");
        assert_eq!(response.follow_up.as_deref(), Some(ESCALATION_FOLLOW_UP));
    }
}

#[test]
fn medium_keywords_without_high_keywords() {
    assert_eq!(HEALTH_SEVERITY.estimate("I have a fever"), Severity::Medium);
    assert_eq!(HEALTH_SEVERITY.estimate("Nausea since lunch"), Severity::Medium);
    assert_eq!(HEALTH_SEVERITY.estimate("I feel fine"), Severity::Low);
}

#[test]
fn earlier_category_wins_when_two_match() {
    // "tired" is a sleep keyword, "dizzy" a dizziness keyword; sleep is declared first.
    let category = find_category(HEALTH_CATEGORIES, "I'm tired and dizzy").unwrap();
    assert_eq!(category.name, "sleep");

    let response = classify_health_query("I'm tired and dizzy");
    assert!(response.response.contains("trouble sleeping"));
    assert_eq!(response.severity, Severity::Medium);
}

#[test]
fn category_matching_ignores_case() {
    let category = find_category(HEALTH_CATEGORIES, "VERTIGO again").unwrap();
    assert_eq!(category.name, "dizziness");
}

#[test]
fn missing_severity_template_falls_back_to_low() {
    // The sleep category only defines a low template.
    let response = classify_health_query("I can't sleep and have a fever");
    assert_eq!(response.severity, Severity::Medium);
    assert!(response.response.contains("trouble sleeping"));
    assert_eq!(response.suggestions.len(), 5);
    assert_eq!(response.follow_up.as_deref(), Some(TRACKING_FOLLOW_UP));
}

#[test]
fn category_without_usable_template_gets_generic_response() {
    // Dizziness has no low template, so a low-severity match cannot be served by it.
    let dizziness = &HEALTH_CATEGORIES[1];
    let response = assemble_response(Some(dizziness), Severity::Low);
    assert!(response.response.starts_with("I'm here to help"));
    assert_eq!(response.severity, Severity::Low);
}

#[test]
fn unmatched_query_gets_generic_response() {
    let response = classify_health_query("what about my knees");
    assert!(response.response.starts_with("I'm here to help"));
    assert_eq!(response.severity, Severity::Low);
    assert_eq!(response.suggestions[0], "Be specific about your symptoms");
    assert_eq!(response.follow_up.as_deref(), Some(GENERIC_FOLLOW_UP));
}

#[test]
fn greeting_maps_to_generic_response() {
    let response = classify_health_query("Hello there");
    assert!(response.response.starts_with("I'm here to help"));
}

#[test]
fn identical_queries_produce_identical_responses() {
    let text = "Feeling lightheaded after standing up";
    assert_eq!(classify_health_query(text), classify_health_query(text));
}
