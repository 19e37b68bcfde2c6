use std::sync::Arc;

use medisight_assistant::{ConsultationService, DashboardAssistant, HealthAssistant, TokioLatency};
use medisight_storage::ConsultationStore;
use medisight_transcribe::transcripts::TranscriptPicker;
use medisight_transcribe::MockTranscriber;

use crate::config::MedisightConfig;

/// Services shared by every command, built once from the effective config.
pub struct AppState {
    pub health: HealthAssistant,
    pub dashboard: DashboardAssistant,
    pub consultations: ConsultationService,
}

impl AppState {
    pub fn from_config(config: &MedisightConfig) -> Self {
        let profile = config.latency.profile();
        let picker = match config.transcript_seed {
            Some(seed) => TranscriptPicker::seeded(seed),
            None => TranscriptPicker::from_entropy(),
        };

        Self {
            health: HealthAssistant::new(TokioLatency, profile),
            dashboard: DashboardAssistant::new(TokioLatency, profile),
            consultations: ConsultationService::new(
                Arc::new(ConsultationStore::new()),
                MockTranscriber::new(picker),
                TokioLatency,
                profile,
            ),
        }
    }
}
