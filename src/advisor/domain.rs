use serde::{Deserialize, Serialize};

/// Academic subject a student has studied, drawn from the fixed intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    ComputerScience,
    Statistics,
    Economics,
    BusinessStudies,
    Accountancy,
    History,
    Geography,
    PoliticalScience,
    Psychology,
    Sociology,
    Literature,
    ForeignLanguage,
    FineArts,
    Music,
    PhysicalEducation,
    EnvironmentalScience,
    Nursing,
    LegalStudies,
}

impl Subject {
    pub const ALL: [Subject; 22] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::ComputerScience,
        Subject::Statistics,
        Subject::Economics,
        Subject::BusinessStudies,
        Subject::Accountancy,
        Subject::History,
        Subject::Geography,
        Subject::PoliticalScience,
        Subject::Psychology,
        Subject::Sociology,
        Subject::Literature,
        Subject::ForeignLanguage,
        Subject::FineArts,
        Subject::Music,
        Subject::PhysicalEducation,
        Subject::EnvironmentalScience,
        Subject::Nursing,
        Subject::LegalStudies,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::ComputerScience => "Computer Science",
            Subject::Statistics => "Statistics",
            Subject::Economics => "Economics",
            Subject::BusinessStudies => "Business Studies",
            Subject::Accountancy => "Accountancy",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::PoliticalScience => "Political Science",
            Subject::Psychology => "Psychology",
            Subject::Sociology => "Sociology",
            Subject::Literature => "Literature",
            Subject::ForeignLanguage => "Foreign Language",
            Subject::FineArts => "Fine Arts",
            Subject::Music => "Music",
            Subject::PhysicalEducation => "Physical Education",
            Subject::EnvironmentalScience => "Environmental Science",
            Subject::Nursing => "Nursing",
            Subject::LegalStudies => "Legal Studies",
        }
    }

    /// Resolve a user-supplied label. Unknown labels yield `None` so callers
    /// can drop them without failing the whole request.
    pub fn parse_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Broad university field of study. Declaration order is the canonical
/// ranking order: suggestions with equal scores keep this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyField {
    EngineeringTechnology,
    Sciences,
    MedicineHealth,
    ComputerScienceIt,
    BusinessManagement,
    SocialSciences,
    ArtsHumanities,
    Law,
    Education,
    EnvironmentalStudies,
}

impl StudyField {
    pub const ALL: [StudyField; 10] = [
        StudyField::EngineeringTechnology,
        StudyField::Sciences,
        StudyField::MedicineHealth,
        StudyField::ComputerScienceIt,
        StudyField::BusinessManagement,
        StudyField::SocialSciences,
        StudyField::ArtsHumanities,
        StudyField::Law,
        StudyField::Education,
        StudyField::EnvironmentalStudies,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            StudyField::EngineeringTechnology => "Engineering & Technology",
            StudyField::Sciences => "Sciences",
            StudyField::MedicineHealth => "Medicine & Health",
            StudyField::ComputerScienceIt => "Computer Science & IT",
            StudyField::BusinessManagement => "Business & Management",
            StudyField::SocialSciences => "Social Sciences",
            StudyField::ArtsHumanities => "Arts & Humanities",
            StudyField::Law => "Law",
            StudyField::Education => "Education",
            StudyField::EnvironmentalStudies => "Environmental Studies",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(trimmed))
    }

    /// Position in the canonical ordering.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Declared education level of the student at the time of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    Secondary,
    HigherSecondary,
    Bachelors,
    Masters,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Secondary,
        EducationLevel::HigherSecondary,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::Secondary => "10th",
            EducationLevel::HigherSecondary => "12th",
            EducationLevel::Bachelors => "bachelor",
            EducationLevel::Masters => "master",
        }
    }

    /// Informational maturity weight shown alongside results. The scoring
    /// path never reads this; level effects go through the boost table.
    pub const fn weight(self) -> f64 {
        match self {
            EducationLevel::Secondary => 0.8,
            EducationLevel::HigherSecondary => 1.0,
            EducationLevel::Bachelors => 1.2,
            EducationLevel::Masters => 1.4,
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
    }
}
