use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::advisor::StudyField;

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversityId(pub String);

/// Language a programme is taught in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionLanguage {
    English,
    German,
    French,
    Dutch,
    Italian,
    Spanish,
    Polish,
    Czech,
}

impl InstructionLanguage {
    pub const ALL: [InstructionLanguage; 8] = [
        InstructionLanguage::English,
        InstructionLanguage::German,
        InstructionLanguage::French,
        InstructionLanguage::Dutch,
        InstructionLanguage::Italian,
        InstructionLanguage::Spanish,
        InstructionLanguage::Polish,
        InstructionLanguage::Czech,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            InstructionLanguage::English => "English",
            InstructionLanguage::German => "German",
            InstructionLanguage::French => "French",
            InstructionLanguage::Dutch => "Dutch",
            InstructionLanguage::Italian => "Italian",
            InstructionLanguage::Spanish => "Spanish",
            InstructionLanguage::Polish => "Polish",
            InstructionLanguage::Czech => "Czech",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Whether tuition is set by a public authority or by the institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Funding {
    Public,
    Private,
}

impl Funding {
    pub const fn label(self) -> &'static str {
        match self {
            Funding::Public => "public",
            Funding::Private => "private",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "public" => Some(Funding::Public),
            "private" => Some(Funding::Private),
            _ => None,
        }
    }
}

/// One university as browsed, filtered, and compared by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub fields: Vec<StudyField>,
    pub languages: Vec<InstructionLanguage>,
    pub tuition_eur_per_year: u32,
    pub living_cost_eur_per_month: u32,
    pub application_deadline: Option<NaiveDate>,
    pub funding: Funding,
}

impl University {
    pub fn offers(&self, field: StudyField) -> bool {
        self.fields.contains(&field)
    }

    pub fn teaches_in(&self, language: InstructionLanguage) -> bool {
        self.languages.contains(&language)
    }
}

/// Composable catalog filter; unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub country: Option<String>,
    pub field: Option<StudyField>,
    pub language: Option<InstructionLanguage>,
    pub max_tuition_eur: Option<u32>,
}

impl SearchFilter {
    pub fn matches(&self, university: &University) -> bool {
        if let Some(country) = &self.country {
            if !university.country.eq_ignore_ascii_case(country.trim()) {
                return false;
            }
        }
        if let Some(field) = self.field {
            if !university.offers(field) {
                return false;
            }
        }
        if let Some(language) = self.language {
            if !university.teaches_in(language) {
                return false;
            }
        }
        if let Some(ceiling) = self.max_tuition_eur {
            if university.tuition_eur_per_year > ceiling {
                return false;
            }
        }
        true
    }
}

/// Ordering applied to search results. Sorting is stable, so equal keys
/// keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Tuition,
    LivingCost,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Tuition => "tuition",
            SortKey::LivingCost => "living-cost",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "tuition" => Some(SortKey::Tuition),
            "living-cost" | "living_cost" => Some(SortKey::LivingCost),
            _ => None,
        }
    }
}
