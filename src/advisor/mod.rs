//! Field-of-study suggestion engine.
//!
//! A pure, table-driven scorer: the student's selected subjects accumulate
//! affinity weights per field, a per-level multiplier is applied once, and
//! the qualifying fields come back ranked with a human-readable
//! justification. All lookup tables live in `tables` as compiled-in
//! constants over the closed enums in `domain`.

mod engine;
mod tables;

pub mod domain;

#[cfg(test)]
mod tests;

pub use domain::{EducationLevel, StudyField, Subject};
pub use engine::{match_percentages, FieldSuggestion, SuggestionEngine, MAX_SUGGESTIONS};
