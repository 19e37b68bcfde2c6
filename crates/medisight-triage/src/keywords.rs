use medisight_core::models::severity::Severity;

/// A canned answer: narrative text plus ordered suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTemplate {
    pub response: &'static str,
    pub suggestions: &'static [&'static str],
}

/// A named bucket of trigger keywords and the templates it answers with.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCategory {
    pub name: &'static str,
    /// Lower-case triggers, matched as substrings.
    pub keywords: &'static [&'static str],
    pub responses: &'static [(Severity, ResponseTemplate)],
}

impl KeywordCategory {
    /// `lowered` must already be lower-case.
    pub fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, self.keywords)
    }

    /// Template for `severity`, falling back to the `Low` template.
    pub fn template(&self, severity: Severity) -> Option<&ResponseTemplate> {
        self.template_exact(severity)
            .or_else(|| self.template_exact(Severity::Low))
    }

    fn template_exact(&self, severity: Severity) -> Option<&ResponseTemplate> {
        self.responses
            .iter()
            .find(|(level, _)| *level == severity)
            .map(|(_, template)| template)
    }
}

/// Return the first category, in table order, with a keyword in `text`.
///
/// Matching is case-insensitive. Earlier entries win ties.
pub fn find_category<'a>(table: &'a [KeywordCategory], text: &str) -> Option<&'a KeywordCategory> {
    let lowered = text.to_lowercase();
    table.iter().find(|category| category.matches(&lowered))
}

/// The keyword sets that drive severity estimation.
#[derive(Debug, Clone, Copy)]
pub struct SeverityVocabulary {
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
}

impl SeverityVocabulary {
    /// Any `high` keyword wins outright; then any `medium`; otherwise `Low`.
    pub fn estimate(&self, text: &str) -> Severity {
        let lowered = text.to_lowercase();
        if contains_any(&lowered, self.high) {
            Severity::High
        } else if contains_any(&lowered, self.medium) {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

pub(crate) fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
