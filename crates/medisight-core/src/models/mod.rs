pub mod analysis;
pub mod consultation;
pub mod dashboard;
pub mod health;
pub mod severity;
pub mod transcription;
pub mod vitals;
