use medisight_core::models::consultation::Consultation;

pub const PDF_PLACEHOLDER: &str = "PDF generation not implemented in demo";

/// Generate a PDF rendition of a consultation.
///
/// No PDF library is wired in; the recognized
/// `pdf` format returns a fixed notice instead of document bytes.
pub fn generate_pdf(_consultation: &Consultation) -> String {
    PDF_PLACEHOLDER.to_string()
}
