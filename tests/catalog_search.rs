use study_compass::advisor::StudyField;
use study_compass::directory::{
    seed, CatalogError, InstructionLanguage, SearchFilter, SortKey, UniversityId,
};

#[test]
fn unfiltered_search_returns_whole_catalog() {
    let catalog = seed::builtin_catalog();
    let results = catalog.search(&SearchFilter::default(), SortKey::Name);
    assert_eq!(results.len(), catalog.len());
}

#[test]
fn filters_compose() {
    let catalog = seed::builtin_catalog();
    let filter = SearchFilter {
        country: Some("netherlands".to_string()),
        field: Some(StudyField::EngineeringTechnology),
        language: Some(InstructionLanguage::English),
        max_tuition_eur: Some(3000),
    };

    let results = catalog.search(&filter, SortKey::Name);

    assert!(!results.is_empty());
    for university in &results {
        assert!(university.country.eq_ignore_ascii_case("Netherlands"));
        assert!(university.offers(StudyField::EngineeringTechnology));
        assert!(university.teaches_in(InstructionLanguage::English));
        assert!(university.tuition_eur_per_year <= 3000);
    }
}

#[test]
fn tuition_sort_is_ascending() {
    let catalog = seed::builtin_catalog();
    let results = catalog.search(&SearchFilter::default(), SortKey::Tuition);

    for pair in results.windows(2) {
        assert!(pair[0].tuition_eur_per_year <= pair[1].tuition_eur_per_year);
    }
}

#[test]
fn living_cost_sort_is_ascending() {
    let catalog = seed::builtin_catalog();
    let results = catalog.search(&SearchFilter::default(), SortKey::LivingCost);

    for pair in results.windows(2) {
        assert!(pair[0].living_cost_eur_per_month <= pair[1].living_cost_eur_per_month);
    }
}

#[test]
fn comparison_reports_cost_leaders_and_shared_offerings() {
    let catalog = seed::builtin_catalog();
    let ids = vec![
        UniversityId("tum".to_string()),
        UniversityId("tu-delft".to_string()),
        UniversityId("polimi".to_string()),
    ];

    let view = catalog.compare(&ids).expect("comparison builds");

    assert_eq!(view.entries.len(), 3);
    // TUM charges semester fees only; the others charge full tuition.
    assert_eq!(view.cheapest_tuition.0, "tum");
    assert!(view
        .shared_fields
        .contains(&StudyField::EngineeringTechnology));
    assert!(view.shared_languages.contains(&InstructionLanguage::English));
}

#[test]
fn comparison_requires_two_known_ids() {
    let catalog = seed::builtin_catalog();

    match catalog.compare(&[UniversityId("tum".to_string())]) {
        Err(CatalogError::NotEnoughForComparison) => {}
        other => panic!("expected not-enough error, got {other:?}"),
    }

    let ids = vec![
        UniversityId("tum".to_string()),
        UniversityId("atlantis".to_string()),
    ];
    match catalog.compare(&ids) {
        Err(CatalogError::UnknownUniversity(id)) => assert_eq!(id, "atlantis"),
        other => panic!("expected unknown university error, got {other:?}"),
    }
}

#[test]
fn lookup_by_id_round_trips() {
    let catalog = seed::builtin_catalog();
    let heidelberg = catalog
        .get(&UniversityId("heidelberg".to_string()))
        .expect("heidelberg seeded");
    assert_eq!(heidelberg.name, "Heidelberg University");
    assert!(catalog.get(&UniversityId("missing".to_string())).is_none());
}
