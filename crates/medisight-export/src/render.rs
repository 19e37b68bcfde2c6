use medisight_core::models::consultation::Consultation;
use tera::{Context, Tera};

use crate::error::ExportError;

const TEXT_TEMPLATE_NAME: &str = "consultation.txt";

/// Plain-text consultation summary (Jinja2 syntax).
pub const TEXT_TEMPLATE: &str = "\
CONSULTATION SUMMARY
Date: {{ date }}
Doctor: {{ doctor }}
Specialty: {{ specialty }}
Duration: {{ duration_minutes }} minutes

DIAGNOSES:
{% for item in summary.diagnoses -%}
{{ loop.index }}. {{ item }}
{% endfor %}
PRESCRIPTIONS:
{% for item in summary.prescriptions -%}
{{ loop.index }}. {{ item }}
{% endfor %}
ACTION ITEMS:
{% for item in summary.action_items -%}
{{ loop.index }}. {{ item }}
{% endfor %}
FOLLOW-UP:
{{ summary.follow_up }}

FULL TRANSCRIPT:
{{ transcript }}";

/// Render a consultation with [`TEXT_TEMPLATE`].
pub fn render_text(consultation: &Consultation) -> Result<String, ExportError> {
    render_template(TEXT_TEMPLATE_NAME, TEXT_TEMPLATE, consultation)
}

/// Render a Tera template with a consultation as context.
///
/// The consultation's serialized fields become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    consultation: &Consultation,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(consultation)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
