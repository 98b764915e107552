//! End-to-end flow: subjects in, ranked fields out, then universities and a
//! budget verdict for the top field.

use study_compass::advisor::{
    match_percentages, EducationLevel, Subject, SuggestionEngine, MAX_SUGGESTIONS,
};
use study_compass::budget::{assess, AffordabilityVerdict};
use study_compass::directory::{seed, SearchFilter, SortKey};

#[test]
fn suggestions_lead_to_universities_and_a_budget_verdict() {
    let engine = SuggestionEngine::new();
    let selected = vec![Subject::Mathematics, Subject::Physics, Subject::ComputerScience];

    let suggestions = engine.suggest(&selected, EducationLevel::HigherSecondary);
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= MAX_SUGGESTIONS);

    let top_field = suggestions[0].field;
    let catalog = seed::builtin_catalog();
    let filter = SearchFilter {
        field: Some(top_field),
        ..SearchFilter::default()
    };
    let matches = catalog.search(&filter, SortKey::Tuition);
    assert!(
        !matches.is_empty(),
        "seed catalog offers nothing for {top_field:?}"
    );

    let cheapest = matches[0];
    let assessment = assess(cheapest, 2500);
    assert_eq!(assessment.verdict, AffordabilityVerdict::Comfortable);
}

#[test]
fn percentages_track_the_ranked_order() {
    let engine = SuggestionEngine::new();
    let selected = vec![Subject::Biology, Subject::Chemistry, Subject::Psychology];

    let suggestions = engine.suggest(&selected, EducationLevel::Bachelors);
    let percentages = match_percentages(&suggestions);

    assert_eq!(percentages.len(), suggestions.len());
    assert_eq!(percentages.first().copied(), Some(100));
    for pair in percentages.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn every_seeded_field_is_reachable_from_some_subject() {
    // Each field a seed university offers should be suggestable, otherwise
    // the directory advertises programmes the advisor can never recommend.
    let engine = SuggestionEngine::new();
    let catalog = seed::builtin_catalog();

    for university in catalog.iter() {
        for field in &university.fields {
            let reachable = Subject::ALL.iter().any(|subject| {
                engine
                    .suggest(&[*subject], EducationLevel::HigherSecondary)
                    .iter()
                    .any(|suggestion| suggestion.field == *field)
            });
            assert!(reachable, "field {field:?} unreachable from any subject");
        }
    }
}
