use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::analysis::ConsultationAnalysis;
use crate::error::CoreError;

pub const DEFAULT_DOCTOR: &str = "Dr. [To be filled]";
pub const DEFAULT_SPECIALTY: &str = "General Consultation";

/// A recorded doctor–patient interaction and its derived analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Consultation {
    pub id: Uuid,
    pub date: jiff::civil::Date,
    pub doctor: String,
    pub specialty: String,
    pub duration_minutes: u32,
    pub transcript: String,
    pub summary: ConsultationAnalysis,
    pub status: ConsultationStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Consultation {
    /// Merge a partial update into this record and bump `updated_at`.
    pub fn apply_update(&mut self, update: ConsultationUpdate, now: jiff::Timestamp) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(doctor) = update.doctor {
            self.doctor = doctor;
        }
        if let Some(specialty) = update.specialty {
            self.specialty = specialty;
        }
        if let Some(duration) = update.duration_minutes {
            self.duration_minutes = duration;
        }
        if let Some(transcript) = update.transcript {
            self.transcript = transcript;
        }
        if let Some(summary) = update.summary {
            self.summary = summary;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConsultationStatus {
    Recording,
    Processing,
    Completed,
    Error,
}

impl ConsultationStatus {
    /// Transitions are linear: `recording → processing → completed | error`.
    pub fn can_transition_to(self, next: ConsultationStatus) -> bool {
        matches!(
            (self, next),
            (ConsultationStatus::Recording, ConsultationStatus::Processing)
                | (ConsultationStatus::Processing, ConsultationStatus::Completed)
                | (ConsultationStatus::Processing, ConsultationStatus::Error)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ConsultationStatus::Completed | ConsultationStatus::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Recording => "recording",
            ConsultationStatus::Processing => "processing",
            ConsultationStatus::Completed => "completed",
            ConsultationStatus::Error => "error",
        }
    }
}

impl fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the status sequence of one consultation while it is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationLifecycle {
    current: ConsultationStatus,
    history: Vec<ConsultationStatus>,
}

impl ConsultationLifecycle {
    pub fn new() -> Self {
        Self {
            current: ConsultationStatus::Recording,
            history: vec![ConsultationStatus::Recording],
        }
    }

    pub fn status(&self) -> ConsultationStatus {
        self.current
    }

    /// Every status visited so far, starting with `Recording`.
    pub fn history(&self) -> &[ConsultationStatus] {
        &self.history
    }

    pub fn advance(&mut self, next: ConsultationStatus) -> Result<(), CoreError> {
        if !self.current.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.current,
                to: next,
            });
        }
        self.current = next;
        self.history.push(next);
        Ok(())
    }
}

impl Default for ConsultationLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-supplied details for a consultation being processed.
/// Missing fields fall back to defaults when the record is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsultationMetadata {
    #[serde(default)]
    pub date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub doctor: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Partial update of a stored consultation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsultationUpdate {
    #[serde(default)]
    pub date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub doctor: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<ConsultationAnalysis>,
}
