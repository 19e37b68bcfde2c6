//! medisight-export
//!
//! Consultation export as JSON, plain text, or PDF (placeholder).

pub mod error;
pub mod format;
pub mod pdf;
pub mod render;

pub use format::ExportFormat;

use medisight_core::models::consultation::Consultation;
use tracing::debug;

use crate::error::ExportError;

/// Render a consultation in the requested format.
pub fn export_consultation(
    consultation: &Consultation,
    format: ExportFormat,
) -> Result<String, ExportError> {
    debug!(consultation_id = %consultation.id, format = %format, "exporting consultation");

    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(consultation)?),
        ExportFormat::Txt => render::render_text(consultation),
        ExportFormat::Pdf => Ok(pdf::generate_pdf(consultation)),
    }
}
