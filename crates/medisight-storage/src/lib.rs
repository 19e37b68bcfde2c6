//! medisight-storage
//!
//! In-memory consultation repository. Nothing is persisted; the store lives
//! exactly as long as its owner keeps it.

pub mod consultations;
pub mod error;

pub use consultations::ConsultationStore;
