//! Consultation pipeline: audio → transcript → analysis → stored record.
//!
//! A consultation moves through `recording → processing → completed`, or
//! `recording → processing → error` when transcription or analysis fails.
//! Nothing is stored for a failed attempt.

use std::sync::Arc;

use medisight_core::models::analysis::ConsultationAnalysis;
use medisight_core::models::consultation::{
    Consultation, ConsultationLifecycle, ConsultationMetadata, ConsultationStatus,
    ConsultationUpdate, DEFAULT_DOCTOR, DEFAULT_SPECIALTY,
};
use medisight_core::models::transcription::TranscriptionResult;
use medisight_export::ExportFormat;
use medisight_storage::ConsultationStore;
use medisight_transcribe::MockTranscriber;
use medisight_triage::consultation::analyze_transcript;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::AuditEvent;
use crate::error::AssistantError;
use crate::latency::{Latency, LatencyProfile, TokioLatency};

pub struct ConsultationService<L = TokioLatency> {
    store: Arc<ConsultationStore>,
    transcriber: MockTranscriber,
    latency: L,
    profile: LatencyProfile,
}

impl<L: Latency> ConsultationService<L> {
    pub fn new(
        store: Arc<ConsultationStore>,
        transcriber: MockTranscriber,
        latency: L,
        profile: LatencyProfile,
    ) -> Self {
        Self {
            store,
            transcriber,
            latency,
            profile,
        }
    }

    pub fn store(&self) -> &Arc<ConsultationStore> {
        &self.store
    }

    /// Turn recorded audio into a transcript. The audio content is ignored.
    pub async fn transcribe_audio(
        &self,
        audio: &[u8],
    ) -> Result<TranscriptionResult, AssistantError> {
        self.latency.delay(self.profile.transcription).await;
        Ok(self.transcriber.transcribe(audio)?)
    }

    /// Derive diagnoses, prescriptions, follow-up and vitals from a transcript.
    pub async fn analyze_transcript(
        &self,
        transcript: &str,
    ) -> Result<ConsultationAnalysis, AssistantError> {
        self.latency.delay(self.profile.analysis).await;

        if transcript.trim().is_empty() {
            return Err(AssistantError::Processing(
                "transcript is empty".to_string(),
            ));
        }

        let analysis = analyze_transcript(transcript);
        info!(
            urgency = %analysis.urgency,
            diagnoses = analysis.diagnoses.len(),
            prescriptions = analysis.prescriptions.len(),
            "transcript analyzed"
        );
        Ok(analysis)
    }

    /// Transcribe, analyze and store a consultation.
    pub async fn process_consultation(
        &self,
        audio: &[u8],
        metadata: ConsultationMetadata,
    ) -> Result<Consultation, AssistantError> {
        let mut lifecycle = ConsultationLifecycle::new();
        self.process_consultation_tracked(audio, metadata, &mut lifecycle)
            .await
    }

    /// [`process_consultation`](Self::process_consultation), recording each
    /// status change in `lifecycle`. The lifecycle must still be `Recording`.
    pub async fn process_consultation_tracked(
        &self,
        audio: &[u8],
        metadata: ConsultationMetadata,
        lifecycle: &mut ConsultationLifecycle,
    ) -> Result<Consultation, AssistantError> {
        lifecycle.advance(ConsultationStatus::Processing)?;
        info!(audio_bytes = audio.len(), "processing consultation");

        match self.run_pipeline(audio, metadata).await {
            Ok(consultation) => {
                lifecycle.advance(ConsultationStatus::Completed)?;
                AuditEvent::consultation("create", consultation.id)
                    .with_details(json!({ "urgency": consultation.summary.urgency }))
                    .emit();
                Ok(consultation)
            }
            Err(e) => {
                lifecycle.advance(ConsultationStatus::Error)?;
                warn!(error = %e, "consultation processing failed");
                Err(e)
            }
        }
    }

    async fn run_pipeline(
        &self,
        audio: &[u8],
        metadata: ConsultationMetadata,
    ) -> Result<Consultation, AssistantError> {
        let transcription = self.transcribe_audio(audio).await?;
        let analysis = self.analyze_transcript(&transcription.text).await?;

        let now = jiff::Timestamp::now();
        let consultation = Consultation {
            id: Uuid::new_v4(),
            date: metadata
                .date
                .unwrap_or_else(|| jiff::Zoned::now().date()),
            doctor: metadata.doctor.unwrap_or_else(|| DEFAULT_DOCTOR.to_string()),
            specialty: metadata
                .specialty
                .unwrap_or_else(|| DEFAULT_SPECIALTY.to_string()),
            duration_minutes: metadata.duration_minutes.unwrap_or(0),
            transcript: transcription.text,
            summary: analysis,
            status: ConsultationStatus::Completed,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(consultation.clone()).await?;
        Ok(consultation)
    }

    /// All consultations, newest first.
    pub async fn list_consultations(&self) -> Vec<Consultation> {
        self.store.list().await
    }

    pub async fn get_consultation(&self, id: Uuid) -> Result<Consultation, AssistantError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn update_consultation(
        &self,
        id: Uuid,
        update: ConsultationUpdate,
    ) -> Result<Consultation, AssistantError> {
        let updated = self.store.update(id, update).await?;
        AuditEvent::consultation("update", id).emit();
        Ok(updated)
    }

    pub async fn delete_consultation(&self, id: Uuid) -> Result<(), AssistantError> {
        self.store.delete(id).await?;
        AuditEvent::consultation("delete", id).emit();
        Ok(())
    }

    /// Export a consultation by format name (`json`, `txt` or `pdf`).
    ///
    /// An unknown `id` is reported before an unsupported `format`.
    pub async fn export_consultation(
        &self,
        id: Uuid,
        format: &str,
    ) -> Result<String, AssistantError> {
        let consultation = self.store.get(id).await?;
        let format: ExportFormat = format.parse()?;
        let exported = medisight_export::export_consultation(&consultation, format)?;

        AuditEvent::consultation("export", id)
            .with_details(json!({ "format": format.as_str() }))
            .emit();
        Ok(exported)
    }
}
