use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Output of an audio transcription call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranscriptionResult {
    pub text: String,
    pub confidence: f64,
    pub segments: Vec<TranscriptSegment>,
}

/// A timed slice of a transcript. `start` and `end` are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranscriptSegment {
    pub start: u32,
    pub end: u32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub speaker: Option<String>,
}
