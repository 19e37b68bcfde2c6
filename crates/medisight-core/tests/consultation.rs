use medisight_core::error::CoreError;
use medisight_core::models::analysis::ConsultationAnalysis;
use medisight_core::models::consultation::{
    Consultation, ConsultationLifecycle, ConsultationStatus, ConsultationUpdate,
};
use medisight_core::models::severity::Severity;
use uuid::Uuid;

fn sample_consultation() -> Consultation {
    let created = jiff::Timestamp::from_second(1_700_000_000).unwrap();
    Consultation {
        id: Uuid::new_v4(),
        date: jiff::civil::date(2024, 1, 15),
        doctor: "Dr. Smith".to_string(),
        specialty: "Cardiology".to_string(),
        duration_minutes: 20,
        transcript: "Doctor: Good morning.".to_string(),
        summary: ConsultationAnalysis {
            diagnoses: vec![],
            prescriptions: vec![],
            action_items: vec![],
            follow_up: "Follow up as needed.".to_string(),
            key_points: vec![],
            vital_signs: None,
            urgency: Severity::Low,
            confidence: 0.85,
        },
        status: ConsultationStatus::Completed,
        created_at: created,
        updated_at: created,
    }
}

#[test]
fn lifecycle_success_path() {
    let mut lifecycle = ConsultationLifecycle::new();
    lifecycle.advance(ConsultationStatus::Processing).unwrap();
    lifecycle.advance(ConsultationStatus::Completed).unwrap();

    assert_eq!(
        lifecycle.history(),
        &[
            ConsultationStatus::Recording,
            ConsultationStatus::Processing,
            ConsultationStatus::Completed,
        ]
    );
    assert!(lifecycle.status().is_terminal());
}

#[test]
fn lifecycle_error_path() {
    let mut lifecycle = ConsultationLifecycle::new();
    lifecycle.advance(ConsultationStatus::Processing).unwrap();
    lifecycle.advance(ConsultationStatus::Error).unwrap();

    assert_eq!(lifecycle.status(), ConsultationStatus::Error);
    assert_eq!(lifecycle.history().len(), 3);
}

#[test]
fn lifecycle_rejects_skipping_processing() {
    let mut lifecycle = ConsultationLifecycle::new();
    let err = lifecycle.advance(ConsultationStatus::Completed).unwrap_err();

    assert!(matches!(
        err,
        CoreError::InvalidTransition {
            from: ConsultationStatus::Recording,
            to: ConsultationStatus::Completed,
        }
    ));
    assert_eq!(lifecycle.history(), &[ConsultationStatus::Recording]);
}

#[test]
fn lifecycle_rejects_leaving_terminal_state() {
    let mut lifecycle = ConsultationLifecycle::new();
    lifecycle.advance(ConsultationStatus::Processing).unwrap();
    lifecycle.advance(ConsultationStatus::Error).unwrap();

    assert!(lifecycle.advance(ConsultationStatus::Processing).is_err());
    assert!(lifecycle.advance(ConsultationStatus::Completed).is_err());
}

#[test]
fn apply_update_merges_only_provided_fields() {
    let mut consultation = sample_consultation();
    let later = jiff::Timestamp::from_second(1_700_000_600).unwrap();

    consultation.apply_update(
        ConsultationUpdate {
            doctor: Some("Dr. Patel".to_string()),
            duration_minutes: Some(35),
            ..Default::default()
        },
        later,
    );

    assert_eq!(consultation.doctor, "Dr. Patel");
    assert_eq!(consultation.duration_minutes, 35);
    assert_eq!(consultation.specialty, "Cardiology");
    assert_eq!(consultation.updated_at, later);
    assert!(consultation.created_at < consultation.updated_at);
}

#[test]
fn severity_ranks_high_above_low() {
    assert!(Severity::High > Severity::Medium);
    assert!(Severity::Medium > Severity::Low);
    assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
}

#[test]
fn invalid_transition_names_both_states() {
    let mut lifecycle = ConsultationLifecycle::new();
    let err = lifecycle.advance(ConsultationStatus::Error).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid consultation status transition: recording -> error"
    );
}
