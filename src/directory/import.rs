use std::io::Read;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::catalog::{CatalogError, UniversityCatalog};
use super::domain::{Funding, InstructionLanguage, University, UniversityId};
use crate::advisor::StudyField;

/// Load a catalog from a CSV export.
///
/// List-valued columns (`Fields`, `Languages`) hold `;`-separated labels.
/// Unknown labels are import errors rather than silent skips: a typo in the
/// data file should fail loudly instead of shrinking the catalog.
pub fn load_catalog<R: Read>(reader: R) -> Result<UniversityCatalog, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut universities = Vec::new();
    for record in csv_reader.deserialize::<CatalogRow>() {
        let row = record?;
        universities.push(row.into_university()?);
    }

    Ok(UniversityCatalog::new(universities)?)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Fields")]
    fields: String,
    #[serde(rename = "Languages")]
    languages: String,
    #[serde(rename = "Tuition EUR/Year")]
    tuition_eur_per_year: u32,
    #[serde(rename = "Living EUR/Month")]
    living_cost_eur_per_month: u32,
    #[serde(
        rename = "Application Deadline",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    application_deadline: Option<String>,
    #[serde(rename = "Funding")]
    funding: String,
}

impl CatalogRow {
    fn into_university(self) -> Result<University, ImportError> {
        let fields = split_labels(&self.fields)
            .map(|label| {
                StudyField::parse_label(label)
                    .ok_or_else(|| ImportError::UnknownStudyField(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let languages = split_labels(&self.languages)
            .map(|label| {
                InstructionLanguage::parse_label(label)
                    .ok_or_else(|| ImportError::UnknownLanguage(label.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let funding = Funding::parse_label(&self.funding)
            .ok_or_else(|| ImportError::UnknownFunding(self.funding.clone()))?;

        let application_deadline = self
            .application_deadline
            .as_deref()
            .map(|value| {
                parse_deadline(value).ok_or_else(|| ImportError::InvalidDeadline(value.to_string()))
            })
            .transpose()?;

        Ok(University {
            id: UniversityId(self.id),
            name: self.name,
            country: self.country,
            city: self.city,
            fields,
            languages,
            tuition_eur_per_year: self.tuition_eur_per_year,
            living_cost_eur_per_month: self.living_cost_eur_per_month,
            application_deadline,
            funding,
        })
    }
}

fn split_labels(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

fn parse_deadline(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d.%m.%Y"))
        .ok()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Error raised while reading a catalog CSV.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("unknown study field label '{0}'")]
    UnknownStudyField(String),
    #[error("unknown instruction language '{0}'")]
    UnknownLanguage(String),
    #[error("unknown funding kind '{0}' (expected public or private)")]
    UnknownFunding(String),
    #[error("invalid application deadline '{0}' (expected YYYY-MM-DD)")]
    InvalidDeadline(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
