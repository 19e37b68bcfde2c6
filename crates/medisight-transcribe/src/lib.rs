//! medisight-transcribe
//!
//! Mock audio-to-text transcription. The audio bytes are checked for
//! presence and otherwise ignored: the transcript comes from a fixed pool
//! of consultation dialogues.

pub mod error;
pub mod transcripts;

use medisight_core::models::transcription::{TranscriptSegment, TranscriptionResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TranscribeError;
use crate::transcripts::TranscriptPicker;

pub const TRANSCRIPTION_CONFIDENCE: f64 = 0.95;

/// Seconds attributed to each transcript line when building segments.
const SEGMENT_SECONDS: u32 = 30;

/// Audio container formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    Mp3,
    Mp4,
    Wav,
    Flac,
    Ogg,
    Webm,
}

/// Map a file extension to an [`AudioFormat`].
///
/// Returns `None` for extensions that aren't supported audio formats.
pub fn audio_format_for_extension(ext: &str) -> Option<AudioFormat> {
    match ext.to_lowercase().as_str() {
        "mp3" => Some(AudioFormat::Mp3),
        "mp4" | "m4a" => Some(AudioFormat::Mp4),
        "wav" => Some(AudioFormat::Wav),
        "flac" => Some(AudioFormat::Flac),
        "ogg" => Some(AudioFormat::Ogg),
        "webm" => Some(AudioFormat::Webm),
        _ => None,
    }
}

/// Stand-in for a speech-to-text service.
#[derive(Debug, Default)]
pub struct MockTranscriber {
    picker: TranscriptPicker,
}

impl MockTranscriber {
    pub fn new(picker: TranscriptPicker) -> Self {
        Self { picker }
    }

    /// "Transcribe" an audio blob.
    ///
    /// Fails only when `audio` is empty; the content is never inspected.
    pub fn transcribe(&self, audio: &[u8]) -> Result<TranscriptionResult, TranscribeError> {
        if audio.is_empty() {
            return Err(TranscribeError::EmptyAudio);
        }

        let text = self.picker.pick();
        let segments = build_segments(text);

        info!(
            audio_bytes = audio.len(),
            segments = segments.len(),
            "mock transcription complete"
        );

        Ok(TranscriptionResult {
            text: text.to_string(),
            confidence: TRANSCRIPTION_CONFIDENCE,
            segments,
        })
    }
}

/// Split a `Speaker: utterance` transcript into fixed-length timed segments.
pub fn build_segments(transcript: &str) -> Vec<TranscriptSegment> {
    transcript
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .zip(0u32..)
        .map(|(line, index)| {
            let (speaker, text) = match line.split_once(':') {
                Some((speaker, text)) if !speaker.trim().is_empty() && !speaker.contains(' ') => {
                    (Some(speaker.trim().to_string()), text.trim())
                }
                _ => (None, line),
            };
            TranscriptSegment {
                start: index * SEGMENT_SECONDS,
                end: (index + 1) * SEGMENT_SECONDS,
                text: text.to_string(),
                speaker,
            }
        })
        .collect()
}
