//! Compiled-in lookup tables feeding the suggestion engine.
//!
//! All tables are total over the closed enums, so a field or level added to
//! the domain without a matching row here fails to compile instead of
//! silently scoring as zero or unboosted.

use super::domain::{EducationLevel, StudyField, Subject};

/// How strongly a subject contributes to each field. Weights do not sum to
/// one; a subject may predict several fields with different strength.
pub(crate) fn affinities(subject: Subject) -> &'static [(StudyField, f64)] {
    match subject {
        Subject::Mathematics => &[
            (StudyField::EngineeringTechnology, 1.0),
            (StudyField::Sciences, 0.9),
            (StudyField::ComputerScienceIt, 0.9),
            (StudyField::BusinessManagement, 0.5),
        ],
        Subject::Physics => &[
            (StudyField::EngineeringTechnology, 1.0),
            (StudyField::Sciences, 0.9),
        ],
        Subject::Chemistry => &[
            (StudyField::Sciences, 1.0),
            (StudyField::MedicineHealth, 0.8),
            (StudyField::EngineeringTechnology, 0.6),
        ],
        Subject::Biology => &[
            (StudyField::MedicineHealth, 1.0),
            (StudyField::Sciences, 0.9),
            (StudyField::EnvironmentalStudies, 0.6),
        ],
        Subject::ComputerScience => &[
            (StudyField::ComputerScienceIt, 1.0),
            (StudyField::EngineeringTechnology, 0.8),
        ],
        Subject::Statistics => &[
            (StudyField::Sciences, 0.8),
            (StudyField::ComputerScienceIt, 0.7),
            (StudyField::BusinessManagement, 0.6),
        ],
        Subject::Economics => &[
            (StudyField::BusinessManagement, 1.0),
            (StudyField::SocialSciences, 0.7),
        ],
        Subject::BusinessStudies => &[(StudyField::BusinessManagement, 1.0)],
        Subject::Accountancy => &[(StudyField::BusinessManagement, 0.9)],
        Subject::History => &[
            (StudyField::ArtsHumanities, 1.0),
            (StudyField::SocialSciences, 0.7),
            (StudyField::Education, 0.4),
        ],
        Subject::Geography => &[
            (StudyField::SocialSciences, 0.8),
            (StudyField::EnvironmentalStudies, 0.7),
        ],
        Subject::PoliticalScience => &[
            (StudyField::SocialSciences, 1.0),
            (StudyField::Law, 0.7),
        ],
        Subject::Psychology => &[
            (StudyField::SocialSciences, 0.9),
            (StudyField::Education, 0.6),
            (StudyField::MedicineHealth, 0.5),
        ],
        Subject::Sociology => &[
            (StudyField::SocialSciences, 1.0),
            (StudyField::Education, 0.4),
        ],
        Subject::Literature => &[
            (StudyField::ArtsHumanities, 1.0),
            (StudyField::Education, 0.5),
        ],
        Subject::ForeignLanguage => &[
            (StudyField::ArtsHumanities, 0.8),
            (StudyField::Education, 0.5),
        ],
        Subject::FineArts => &[(StudyField::ArtsHumanities, 1.0)],
        Subject::Music => &[(StudyField::ArtsHumanities, 0.9)],
        Subject::PhysicalEducation => &[
            (StudyField::Education, 0.8),
            (StudyField::MedicineHealth, 0.4),
        ],
        Subject::EnvironmentalScience => &[
            (StudyField::EnvironmentalStudies, 1.0),
            (StudyField::Sciences, 0.7),
        ],
        Subject::Nursing => &[(StudyField::MedicineHealth, 1.0)],
        Subject::LegalStudies => &[
            (StudyField::Law, 1.0),
            (StudyField::SocialSciences, 0.5),
        ],
    }
}

/// Multiplier applied once to a field's summed score for the given level.
pub(crate) const fn level_boost(level: EducationLevel, field: StudyField) -> f64 {
    match level {
        EducationLevel::Secondary => match field {
            StudyField::MedicineHealth | StudyField::Law => 0.9,
            _ => 1.0,
        },
        EducationLevel::HigherSecondary => match field {
            StudyField::EngineeringTechnology
            | StudyField::Sciences
            | StudyField::MedicineHealth
            | StudyField::ComputerScienceIt => 1.1,
            StudyField::Education => 0.9,
            _ => 1.0,
        },
        EducationLevel::Bachelors => match field {
            StudyField::BusinessManagement | StudyField::ComputerScienceIt => 1.2,
            StudyField::EngineeringTechnology
            | StudyField::MedicineHealth
            | StudyField::SocialSciences
            | StudyField::Law
            | StudyField::Education
            | StudyField::EnvironmentalStudies => 1.1,
            StudyField::Sciences | StudyField::ArtsHumanities => 1.0,
        },
        EducationLevel::Masters => match field {
            StudyField::Sciences => 1.3,
            StudyField::ArtsHumanities => 1.1,
            _ => 1.2,
        },
    }
}

/// Short description shown with each suggested field.
pub(crate) const fn description(field: StudyField) -> &'static str {
    match field {
        StudyField::EngineeringTechnology => {
            "Degrees spanning mechanical, electrical, civil, and industrial engineering."
        }
        StudyField::Sciences => {
            "Research-driven programmes in physics, chemistry, biology, and mathematics."
        }
        StudyField::MedicineHealth => {
            "Clinical and health-science programmes from medicine to nursing and public health."
        }
        StudyField::ComputerScienceIt => {
            "Software engineering, data science, and information systems programmes."
        }
        StudyField::BusinessManagement => {
            "Business administration, finance, and management programmes."
        }
        StudyField::SocialSciences => {
            "Programmes examining societies, politics, economies, and human behaviour."
        }
        StudyField::ArtsHumanities => {
            "Languages, literature, history, philosophy, and the creative arts."
        }
        StudyField::Law => "Legal studies, European and international law programmes.",
        StudyField::Education => "Teaching, pedagogy, and educational science programmes.",
        StudyField::EnvironmentalStudies => {
            "Environmental science, sustainability, and agricultural programmes."
        }
    }
}

/// Justification template for a field; `{subjects}` is replaced with the
/// comma-joined matched subjects in first-seen order.
pub(crate) const fn reasoning_template(field: StudyField) -> &'static str {
    match field {
        StudyField::EngineeringTechnology => {
            "Your strength in {subjects} points to engineering programmes, where structured problem solving is the daily craft."
        }
        StudyField::Sciences => {
            "Your grounding in {subjects} fits research-oriented science programmes built on experiment and theory."
        }
        StudyField::MedicineHealth => {
            "Your background in {subjects} matches health-science programmes that combine care with clinical rigour."
        }
        StudyField::ComputerScienceIt => {
            "Your work in {subjects} translates directly into computing and data-focused programmes."
        }
        StudyField::BusinessManagement => {
            "Your experience with {subjects} suits business programmes centred on markets, organisations, and decision making."
        }
        StudyField::SocialSciences => {
            "Your interest in {subjects} aligns with programmes that study how societies and institutions work."
        }
        StudyField::ArtsHumanities => {
            "Your engagement with {subjects} fits humanities programmes built on interpretation, language, and culture."
        }
        StudyField::Law => {
            "Your study of {subjects} is a common route into legal programmes and their argumentative tradition."
        }
        StudyField::Education => {
            "Your familiarity with {subjects} supports programmes preparing you to teach and design learning."
        }
        StudyField::EnvironmentalStudies => {
            "Your focus on {subjects} leads naturally to environmental and sustainability programmes."
        }
    }
}

/// Fixed sentence appended for students already in a bachelor's programme.
pub(crate) const BACHELORS_SUFFIX: &str =
    " Building on your bachelor's studies, a specialised master's programme in this area is a natural next step.";

/// Fixed sentence appended for students already holding a master's focus.
pub(crate) const MASTERS_SUFFIX: &str =
    " At master's level, look for research-oriented and advanced specialisation tracks in this area.";
