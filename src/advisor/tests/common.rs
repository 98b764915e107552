use crate::advisor::{EducationLevel, Subject, SuggestionEngine};

pub(super) fn engine() -> SuggestionEngine {
    SuggestionEngine::new()
}

/// Parse user-style labels the way the presentation layer does: unknown
/// labels are dropped rather than rejected.
pub(super) fn subjects(labels: &[&str]) -> Vec<Subject> {
    labels
        .iter()
        .filter_map(|label| Subject::parse_label(label))
        .collect()
}

pub(super) fn higher_secondary() -> EducationLevel {
    EducationLevel::HigherSecondary
}
