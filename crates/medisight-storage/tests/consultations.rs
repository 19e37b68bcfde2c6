use medisight_core::models::consultation::{Consultation, ConsultationStatus, ConsultationUpdate};
use medisight_storage::error::StorageError;
use medisight_storage::ConsultationStore;
use medisight_triage::consultation::analyze_transcript;
use uuid::Uuid;

fn consultation(doctor: &str) -> Consultation {
    let now = jiff::Timestamp::now();
    let transcript = "Doctor: BP is 128/82. Follow up in 6 months.".to_string();
    Consultation {
        id: Uuid::new_v4(),
        date: jiff::civil::date(2024, 3, 1),
        doctor: doctor.to_string(),
        specialty: "Internal Medicine".to_string(),
        duration_minutes: 15,
        summary: analyze_transcript(&transcript),
        transcript,
        status: ConsultationStatus::Completed,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn newest_consultation_is_listed_first() {
    let store = ConsultationStore::new();
    let first = consultation("Dr. Adams");
    let second = consultation("Dr. Baker");

    store.insert(first.clone()).await.unwrap();
    store.insert(second.clone()).await.unwrap();

    let listed = store.list().await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn duplicate_ids_are_rejected() {
    let store = ConsultationStore::new();
    let record = consultation("Dr. Adams");

    store.insert(record.clone()).await.unwrap();
    let err = store.insert(record.clone()).await.unwrap_err();

    assert!(matches!(err, StorageError::Conflict { id } if id == record.id));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn update_merges_fields_and_bumps_timestamp() {
    let store = ConsultationStore::new();
    let record = consultation("Dr. Adams");
    store.insert(record.clone()).await.unwrap();

    let updated = store
        .update(
            record.id,
            ConsultationUpdate {
                specialty: Some("Cardiology".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.specialty, "Cardiology");
    assert_eq!(updated.doctor, "Dr. Adams");
    assert!(updated.updated_at >= record.updated_at);
    assert_eq!(store.get(record.id).await.unwrap().specialty, "Cardiology");
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let store = ConsultationStore::new();
    let missing = Uuid::new_v4();

    assert!(matches!(
        store.get(missing).await,
        Err(StorageError::NotFound { id }) if id == missing
    ));
    assert!(matches!(
        store.update(missing, ConsultationUpdate::default()).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete(missing).await,
        Err(StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn delete_and_clear_remove_records() {
    let store = ConsultationStore::new();
    let keep = consultation("Dr. Adams");
    let removed = consultation("Dr. Baker");
    store.insert(keep.clone()).await.unwrap();
    store.insert(removed.clone()).await.unwrap();

    store.delete(removed.id).await.unwrap();
    assert_eq!(store.list().await.len(), 1);
    assert!(store.get(keep.id).await.is_ok());

    store.clear().await;
    assert!(store.is_empty().await);
}
