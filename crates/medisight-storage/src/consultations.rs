use medisight_core::models::consultation::{Consultation, ConsultationUpdate};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StorageError;

/// Ordered list of consultations, newest first.
///
/// Shared by reference (typically behind an `Arc`); every mutation takes
/// the write lock, so concurrent writers are serialized.
#[derive(Debug, Default)]
pub struct ConsultationStore {
    records: RwLock<Vec<Consultation>>,
}

impl ConsultationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the front of the list.
    pub async fn insert(&self, consultation: Consultation) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        if records.iter().any(|c| c.id == consultation.id) {
            return Err(StorageError::Conflict {
                id: consultation.id,
            });
        }
        info!(consultation_id = %consultation.id, "consultation stored");
        records.insert(0, consultation);
        Ok(())
    }

    pub async fn list(&self) -> Vec<Consultation> {
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Result<Consultation, StorageError> {
        self.records
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StorageError::NotFound { id })
    }

    /// Merge `update` into the stored record and return the new version.
    pub async fn update(
        &self,
        id: Uuid,
        update: ConsultationUpdate,
    ) -> Result<Consultation, StorageError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StorageError::NotFound { id })?;

        record.apply_update(update, jiff::Timestamp::now());
        debug!(consultation_id = %id, "consultation updated");
        Ok(record.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|c| c.id == id)
            .ok_or(StorageError::NotFound { id })?;
        records.remove(index);
        debug!(consultation_id = %id, "consultation deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Drop every record. Intended for test setup.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}
