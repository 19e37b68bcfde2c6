//! Consultation transcript analysis.
//!
//! Each output list has its own rule table. A rule inspects the whole
//! lower-cased transcript once and contributes its finding when it fires;
//! rules never suppress one another.

use medisight_core::models::analysis::ConsultationAnalysis;

use crate::keywords::{contains_any, SeverityVocabulary};
use crate::vitals::extract_vitals_opt;

pub const ANALYSIS_CONFIDENCE: f64 = 0.85;
pub const DEFAULT_FOLLOW_UP: &str = "Follow up as needed.";

/// A keyword rule. Fires when any `any_of` term is present (or `any_of`
/// is empty) and every `all_of` term is present.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub any_of: &'static [&'static str],
    pub all_of: &'static [&'static str],
    pub finding: &'static str,
}

impl Rule {
    const fn any(any_of: &'static [&'static str], finding: &'static str) -> Self {
        Self {
            any_of,
            all_of: &[],
            finding,
        }
    }

    const fn all(all_of: &'static [&'static str], finding: &'static str) -> Self {
        Self {
            any_of: &[],
            all_of,
            finding,
        }
    }

    /// `lowered` must already be lower-case.
    pub fn fires(&self, lowered: &str) -> bool {
        (self.any_of.is_empty() || contains_any(lowered, self.any_of))
            && self.all_of.iter().all(|term| lowered.contains(term))
    }
}

pub const URGENCY: SeverityVocabulary = SeverityVocabulary {
    high: &["emergency", "severe"],
    medium: &["follow up", "recheck"],
};

pub static DIAGNOSIS_RULES: &[Rule] = &[
    Rule::any(&["chest pain", "cardiac"], "Chest Pain - Rule out cardiac etiology"),
    Rule::any(&["hypertension", "high blood pressure"], "Hypertension"),
    Rule::any(&["hyperlipidemia", "cholesterol"], "Hyperlipidemia"),
];

pub static PRESCRIPTION_RULES: &[Rule] = &[
    Rule::any(&["nitroglycerin"], "Nitroglycerin 0.4mg sublingual PRN"),
    Rule::any(&["lisinopril"], "Lisinopril 10mg daily"),
    Rule::any(&["amlodipine"], "Amlodipine 10mg daily"),
    Rule::any(&["atorvastatin"], "Atorvastatin 20mg daily"),
];

pub static ACTION_ITEM_RULES: &[Rule] = &[
    Rule::any(&["ekg"], "EKG performed"),
    Rule::any(&["blood work", "lab"], "Laboratory tests ordered"),
    Rule::all(&["blood pressure", "monitor"], "Blood pressure monitoring"),
];

pub static KEY_POINT_RULES: &[Rule] = &[
    Rule::any(&["chest pain"], "Patient reports chest pain"),
    Rule::any(&["blood pressure"], "Blood pressure monitoring required"),
    Rule::any(&["medication"], "Medication management discussed"),
    Rule::any(&["lifestyle"], "Lifestyle modifications recommended"),
];

/// Ordered; the first rule that fires decides the follow-up.
pub static FOLLOW_UP_RULES: &[Rule] = &[
    Rule::any(
        &["emergency", "immediately"],
        "Return immediately if symptoms worsen or new symptoms develop.",
    ),
    Rule::any(&["2 weeks", "two weeks"], "Follow up in 2 weeks for re-evaluation."),
    Rule::any(&["3 months"], "Follow up in 3 months for routine care and lab recheck."),
    Rule::any(&["6 months"], "Follow up in 6 months for annual physical."),
];

/// Derive a structured analysis from a consultation transcript.
pub fn analyze_transcript(transcript: &str) -> ConsultationAnalysis {
    let lowered = transcript.to_lowercase();

    ConsultationAnalysis {
        diagnoses: collect_findings(DIAGNOSIS_RULES, &lowered),
        prescriptions: collect_findings(PRESCRIPTION_RULES, &lowered),
        action_items: collect_findings(ACTION_ITEM_RULES, &lowered),
        follow_up: follow_up_for(&lowered).to_string(),
        key_points: collect_findings(KEY_POINT_RULES, &lowered),
        vital_signs: extract_vitals_opt(transcript),
        urgency: URGENCY.estimate(transcript),
        confidence: ANALYSIS_CONFIDENCE,
    }
}

fn collect_findings(rules: &[Rule], lowered: &str) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.fires(lowered))
        .map(|rule| rule.finding.to_string())
        .collect()
}

fn follow_up_for(lowered: &str) -> &'static str {
    FOLLOW_UP_RULES
        .iter()
        .find(|rule| rule.fires(lowered))
        .map_or(DEFAULT_FOLLOW_UP, |rule| rule.finding)
}
