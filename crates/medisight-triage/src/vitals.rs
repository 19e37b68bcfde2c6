//! Best-effort vital sign extraction from free text.
//!
//! Each pattern contributes at most its first match. A pattern that does
//! not match leaves its field empty; extraction never fails.

use std::sync::LazyLock;

use medisight_core::models::vitals::VitalSigns;
use regex::Regex;

static BLOOD_PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4}/\d{2,3})").expect("valid blood pressure pattern"));

// The reading must sit in the same sentence as the phrase, so "heart rate.
// BP is 140/90" does not report 140.
static HEART_RATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)heart rate[^.\d\n]*(\d{2,3})").expect("valid heart rate pattern")
});

// Temperature and weight follow the same same-sentence rule and must carry
// a unit; Celsius readings are not reported.
static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\btemp(?:erature)?\b[^.\d\n]*(\d{2,3}(?:\.\d)?)\s*°?\s*F\b")
        .expect("valid temperature pattern")
});

static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bweight\b[^.\d\n]*(\d{2,3}(?:\.\d)?)\s*(lbs?|kg)\b")
        .expect("valid weight pattern")
});

/// Extract whatever vitals can be found in `text`.
pub fn extract_vitals(text: &str) -> VitalSigns {
    VitalSigns {
        blood_pressure: BLOOD_PRESSURE
            .captures(text)
            .map(|c| c[1].to_string()),
        heart_rate: HEART_RATE
            .captures(text)
            .map(|c| format!("{} bpm", &c[1])),
        temperature: TEMPERATURE
            .captures(text)
            .map(|c| format!("{}°F", &c[1])),
        weight: WEIGHT
            .captures(text)
            .map(|c| format!("{} {}", &c[1], c[2].to_lowercase())),
    }
}

/// Like [`extract_vitals`], but `None` when nothing was found.
pub fn extract_vitals_opt(text: &str) -> Option<VitalSigns> {
    let vitals = extract_vitals(text);
    (!vitals.is_empty()).then_some(vitals)
}
