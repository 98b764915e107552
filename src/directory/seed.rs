//! Compiled-in starter catalog so the tools work without a data file.
//!
//! Figures are indicative EUR amounts for a single student; deadlines are
//! the general international intake dates.

use chrono::NaiveDate;

use super::catalog::UniversityCatalog;
use super::domain::{Funding, InstructionLanguage, University, UniversityId};
use crate::advisor::StudyField;

/// Build the built-in catalog. Ids are fixed literals, so construction
/// bypasses the duplicate check.
pub fn builtin_catalog() -> UniversityCatalog {
    UniversityCatalog::from_trusted(vec![
        university(
            "tum",
            "Technical University of Munich",
            "Germany",
            "Munich",
            &[
                StudyField::EngineeringTechnology,
                StudyField::Sciences,
                StudyField::ComputerScienceIt,
            ],
            &[InstructionLanguage::German, InstructionLanguage::English],
            300,
            1250,
            NaiveDate::from_ymd_opt(2026, 7, 15),
            Funding::Public,
        ),
        university(
            "tu-delft",
            "Delft University of Technology",
            "Netherlands",
            "Delft",
            &[
                StudyField::EngineeringTechnology,
                StudyField::ComputerScienceIt,
                StudyField::EnvironmentalStudies,
            ],
            &[InstructionLanguage::Dutch, InstructionLanguage::English],
            2530,
            1100,
            NaiveDate::from_ymd_opt(2026, 5, 1),
            Funding::Public,
        ),
        university(
            "ku-leuven",
            "KU Leuven",
            "Belgium",
            "Leuven",
            &[
                StudyField::Sciences,
                StudyField::MedicineHealth,
                StudyField::SocialSciences,
                StudyField::ArtsHumanities,
                StudyField::Law,
            ],
            &[InstructionLanguage::Dutch, InstructionLanguage::English],
            1092,
            980,
            NaiveDate::from_ymd_opt(2026, 6, 1),
            Funding::Public,
        ),
        university(
            "polimi",
            "Politecnico di Milano",
            "Italy",
            "Milan",
            &[
                StudyField::EngineeringTechnology,
                StudyField::ComputerScienceIt,
            ],
            &[InstructionLanguage::Italian, InstructionLanguage::English],
            3900,
            1050,
            NaiveDate::from_ymd_opt(2026, 3, 31),
            Funding::Public,
        ),
        university(
            "uva",
            "University of Amsterdam",
            "Netherlands",
            "Amsterdam",
            &[
                StudyField::BusinessManagement,
                StudyField::SocialSciences,
                StudyField::Sciences,
                StudyField::Law,
            ],
            &[InstructionLanguage::Dutch, InstructionLanguage::English],
            2530,
            1350,
            NaiveDate::from_ymd_opt(2026, 5, 1),
            Funding::Public,
        ),
        university(
            "charles",
            "Charles University",
            "Czechia",
            "Prague",
            &[
                StudyField::MedicineHealth,
                StudyField::Law,
                StudyField::ArtsHumanities,
                StudyField::Sciences,
            ],
            &[InstructionLanguage::Czech, InstructionLanguage::English],
            4500,
            750,
            NaiveDate::from_ymd_opt(2026, 2, 28),
            Funding::Public,
        ),
        university(
            "uw",
            "University of Warsaw",
            "Poland",
            "Warsaw",
            &[
                StudyField::SocialSciences,
                StudyField::BusinessManagement,
                StudyField::ArtsHumanities,
                StudyField::Sciences,
            ],
            &[InstructionLanguage::Polish, InstructionLanguage::English],
            2000,
            700,
            NaiveDate::from_ymd_opt(2026, 7, 5),
            Funding::Public,
        ),
        university(
            "sorbonne",
            "Sorbonne University",
            "France",
            "Paris",
            &[
                StudyField::ArtsHumanities,
                StudyField::Sciences,
                StudyField::MedicineHealth,
            ],
            &[InstructionLanguage::French],
            170,
            1300,
            NaiveDate::from_ymd_opt(2026, 4, 30),
            Funding::Public,
        ),
        university(
            "heidelberg",
            "Heidelberg University",
            "Germany",
            "Heidelberg",
            &[
                StudyField::MedicineHealth,
                StudyField::Sciences,
                StudyField::ArtsHumanities,
                StudyField::Law,
            ],
            &[InstructionLanguage::German, InstructionLanguage::English],
            340,
            1000,
            NaiveDate::from_ymd_opt(2026, 6, 15),
            Funding::Public,
        ),
        university(
            "ucm",
            "Complutense University of Madrid",
            "Spain",
            "Madrid",
            &[
                StudyField::SocialSciences,
                StudyField::Education,
                StudyField::ArtsHumanities,
                StudyField::MedicineHealth,
            ],
            &[InstructionLanguage::Spanish],
            1800,
            950,
            NaiveDate::from_ymd_opt(2026, 6, 30),
            Funding::Public,
        ),
        university(
            "bocconi",
            "Bocconi University",
            "Italy",
            "Milan",
            &[
                StudyField::BusinessManagement,
                StudyField::SocialSciences,
                StudyField::Law,
            ],
            &[InstructionLanguage::Italian, InstructionLanguage::English],
            14000,
            1150,
            NaiveDate::from_ymd_opt(2026, 1, 31),
            Funding::Private,
        ),
        university(
            "wageningen",
            "Wageningen University",
            "Netherlands",
            "Wageningen",
            &[StudyField::EnvironmentalStudies, StudyField::Sciences],
            &[InstructionLanguage::Dutch, InstructionLanguage::English],
            2530,
            950,
            NaiveDate::from_ymd_opt(2026, 5, 1),
            Funding::Public,
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn university(
    id: &str,
    name: &str,
    country: &str,
    city: &str,
    fields: &[StudyField],
    languages: &[InstructionLanguage],
    tuition_eur_per_year: u32,
    living_cost_eur_per_month: u32,
    application_deadline: Option<NaiveDate>,
    funding: Funding,
) -> University {
    University {
        id: UniversityId(id.to_string()),
        name: name.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        fields: fields.to_vec(),
        languages: languages.to_vec(),
        tuition_eur_per_year,
        living_cost_eur_per_month,
        application_deadline,
        funding,
    }
}
