use medisight_core::error::CoreError;
use medisight_export::error::ExportError;
use medisight_storage::error::StorageError;
use medisight_transcribe::error::TranscribeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscribeError),

    #[error("processing failed: {0}")]
    Processing(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AssistantError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssistantError::Storage(StorageError::NotFound { .. }))
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, AssistantError::Export(ExportError::UnsupportedFormat(_)))
    }

    /// Transcription or analysis failed while processing a consultation.
    pub fn is_processing_failure(&self) -> bool {
        matches!(
            self,
            AssistantError::Transcription(_) | AssistantError::Processing(_)
        )
    }
}
