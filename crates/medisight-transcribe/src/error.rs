use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("no audio data to transcribe")]
    EmptyAudio,

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}
