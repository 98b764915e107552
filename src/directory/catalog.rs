use super::compare::{build_comparison, ComparisonView};
use super::domain::{SearchFilter, SortKey, University, UniversityId};

/// In-memory catalog backing search, comparison, and budget lookups.
///
/// The catalog is immutable once constructed; every query borrows from it.
#[derive(Debug, Clone, Default)]
pub struct UniversityCatalog {
    universities: Vec<University>,
}

impl UniversityCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(universities: Vec<University>) -> Result<Self, CatalogError> {
        for (position, university) in universities.iter().enumerate() {
            let clash = universities[..position]
                .iter()
                .any(|earlier| earlier.id == university.id);
            if clash {
                return Err(CatalogError::DuplicateId(university.id.0.clone()));
            }
        }
        Ok(Self { universities })
    }

    /// Construction path for compiled-in data whose ids are fixed literals.
    pub(crate) fn from_trusted(universities: Vec<University>) -> Self {
        Self { universities }
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &University> {
        self.universities.iter()
    }

    pub fn get(&self, id: &UniversityId) -> Option<&University> {
        self.universities
            .iter()
            .find(|university| &university.id == id)
    }

    /// Filter and order the catalog. The sort is stable, so universities
    /// with equal keys keep their catalog order.
    pub fn search(&self, filter: &SearchFilter, sort: SortKey) -> Vec<&University> {
        let mut results: Vec<&University> = self
            .universities
            .iter()
            .filter(|university| filter.matches(university))
            .collect();

        match sort {
            SortKey::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Tuition => results.sort_by_key(|university| university.tuition_eur_per_year),
            SortKey::LivingCost => {
                results.sort_by_key(|university| university.living_cost_eur_per_month)
            }
        }

        results
    }

    /// Build a side-by-side comparison for the given ids.
    pub fn compare(&self, ids: &[UniversityId]) -> Result<ComparisonView, CatalogError> {
        if ids.len() < 2 {
            return Err(CatalogError::NotEnoughForComparison);
        }

        let mut selected = Vec::with_capacity(ids.len());
        for id in ids {
            let university = self
                .get(id)
                .ok_or_else(|| CatalogError::UnknownUniversity(id.0.clone()))?;
            selected.push(university);
        }

        build_comparison(&selected).ok_or(CatalogError::NotEnoughForComparison)
    }
}

/// Error raised by catalog construction and queries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate university id '{0}'")]
    DuplicateId(String),
    #[error("unknown university id '{0}'")]
    UnknownUniversity(String),
    #[error("comparison needs at least two universities")]
    NotEnoughForComparison,
}
