use serde::{Deserialize, Serialize};

use super::domain::{EducationLevel, StudyField, Subject};
use super::tables;

/// Ranked output never exceeds this many fields.
pub const MAX_SUGGESTIONS: usize = 5;

/// Stateless engine mapping a student's subjects and level to ranked fields.
///
/// The engine owns no data and performs no I/O; every invocation allocates
/// its own output, so shared use across threads needs no synchronisation.
#[derive(Debug, Default)]
pub struct SuggestionEngine;

impl SuggestionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score every field against the selected subjects and return the
    /// qualifying fields, best first.
    ///
    /// Duplicate subjects in the input are inert: only the first occurrence
    /// contributes. There are no failure modes; inputs that match nothing
    /// produce an empty list.
    pub fn suggest(&self, selected: &[Subject], level: EducationLevel) -> Vec<FieldSuggestion> {
        let mut scores = [0.0_f64; StudyField::ALL.len()];
        let mut matched: Vec<Vec<Subject>> = vec![Vec::new(); StudyField::ALL.len()];

        let mut seen: Vec<Subject> = Vec::with_capacity(selected.len());
        for &subject in selected {
            if seen.contains(&subject) {
                continue;
            }
            seen.push(subject);

            for &(field, weight) in tables::affinities(subject) {
                let slot = field.index();
                scores[slot] += weight;
                if !matched[slot].contains(&subject) {
                    matched[slot].push(subject);
                }
            }
        }

        // The level multiplier scales the summed score exactly once;
        // applying it per subject would compound the level effect.
        let mut suggestions = Vec::new();
        for field in StudyField::ALL {
            let slot = field.index();
            let score = scores[slot] * tables::level_boost(level, field);
            if score <= 0.0 {
                continue;
            }

            let matched_subjects = std::mem::take(&mut matched[slot]);
            let reasoning = reasoning_for(field, &matched_subjects, level);
            suggestions.push(FieldSuggestion {
                field,
                score,
                description: tables::description(field).to_string(),
                matched_subjects,
                reasoning,
            });
        }

        // Stable sort over the canonical field order, so equal scores keep
        // their enum order.
        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

/// One recommended field of study with its audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSuggestion {
    pub field: StudyField,
    pub score: f64,
    pub description: String,
    pub matched_subjects: Vec<Subject>,
    pub reasoning: String,
}

fn reasoning_for(field: StudyField, matched: &[Subject], level: EducationLevel) -> String {
    if matched.is_empty() {
        return String::new();
    }

    let joined = matched
        .iter()
        .map(|subject| subject.label())
        .collect::<Vec<_>>()
        .join(", ");
    let mut text = tables::reasoning_template(field).replace("{subjects}", &joined);

    match level {
        EducationLevel::Bachelors => text.push_str(tables::BACHELORS_SUFFIX),
        EducationLevel::Masters => text.push_str(tables::MASTERS_SUFFIX),
        EducationLevel::Secondary | EducationLevel::HigherSecondary => {}
    }

    text
}

/// Display-only normalisation: the best score renders as 100% and the rest
/// are rounded relative to it. This never feeds back into ranking or the
/// truncation above.
pub fn match_percentages(suggestions: &[FieldSuggestion]) -> Vec<u8> {
    let Some(max) = suggestions
        .iter()
        .map(|suggestion| suggestion.score)
        .max_by(f64::total_cmp)
    else {
        return Vec::new();
    };

    suggestions
        .iter()
        .map(|suggestion| (100.0 * suggestion.score / max).round() as u8)
        .collect()
}
