use thiserror::Error;

use crate::models::consultation::ConsultationStatus;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid consultation status transition: {from} -> {to}")]
    InvalidTransition {
        from: ConsultationStatus,
        to: ConsultationStatus,
    },
}
