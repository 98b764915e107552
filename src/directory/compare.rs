use serde::{Deserialize, Serialize};

use super::domain::{Funding, InstructionLanguage, University, UniversityId};
use crate::advisor::StudyField;

/// Side-by-side view over a short list of universities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub entries: Vec<ComparisonEntry>,
    pub cheapest_tuition: UniversityId,
    pub lowest_living_cost: UniversityId,
    /// Fields offered by every compared university, in canonical order.
    pub shared_fields: Vec<StudyField>,
    pub shared_languages: Vec<InstructionLanguage>,
}

/// Per-university row of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub id: UniversityId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub tuition_eur_per_year: u32,
    pub living_cost_eur_per_month: u32,
    pub funding: Funding,
}

/// Returns `None` for fewer than two universities; ties on cost keep the
/// first-listed university.
pub(crate) fn build_comparison(selected: &[&University]) -> Option<ComparisonView> {
    let (first, rest) = selected.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut cheapest_tuition = *first;
    let mut lowest_living_cost = *first;
    for university in rest {
        if university.tuition_eur_per_year < cheapest_tuition.tuition_eur_per_year {
            cheapest_tuition = university;
        }
        if university.living_cost_eur_per_month < lowest_living_cost.living_cost_eur_per_month {
            lowest_living_cost = university;
        }
    }

    let shared_fields = StudyField::ALL
        .into_iter()
        .filter(|field| selected.iter().all(|university| university.offers(*field)))
        .collect();
    let shared_languages = InstructionLanguage::ALL
        .into_iter()
        .filter(|language| {
            selected
                .iter()
                .all(|university| university.teaches_in(*language))
        })
        .collect();

    let entries = selected
        .iter()
        .map(|university| ComparisonEntry {
            id: university.id.clone(),
            name: university.name.clone(),
            country: university.country.clone(),
            city: university.city.clone(),
            tuition_eur_per_year: university.tuition_eur_per_year,
            living_cost_eur_per_month: university.living_cost_eur_per_month,
            funding: university.funding,
        })
        .collect();

    Some(ComparisonView {
        entries,
        cheapest_tuition: cheapest_tuition.id.clone(),
        lowest_living_cost: lowest_living_cost.id.clone(),
        shared_fields,
        shared_languages,
    })
}
