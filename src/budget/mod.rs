//! Budget-affordability calculator.
//!
//! Pure arithmetic over a university's published costs and the student's
//! monthly budget. All amounts are EUR; conversion is the caller's problem.

use serde::{Deserialize, Serialize};

use crate::directory::{University, UniversityId};

/// Share of the budget that must remain unspent for a comfortable verdict.
const COMFORT_MARGIN_RATIO: f64 = 0.15;

/// Verdict on whether a monthly budget covers a university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordabilityVerdict {
    Comfortable,
    Tight,
    OverBudget,
}

impl AffordabilityVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            AffordabilityVerdict::Comfortable => "comfortable",
            AffordabilityVerdict::Tight => "tight",
            AffordabilityVerdict::OverBudget => "over budget",
        }
    }
}

/// Cost breakdown and verdict for one university against one budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityAssessment {
    pub university_id: UniversityId,
    pub monthly_budget_eur: u32,
    pub monthly_living_eur: u32,
    /// Tuition spread over twelve months, rounded up.
    pub monthly_tuition_eur: u32,
    pub total_monthly_eur: u32,
    /// Budget minus total cost; negative when the budget falls short.
    pub margin_eur: i64,
    pub verdict: AffordabilityVerdict,
}

/// Assess a monthly budget against a university's living and tuition costs.
pub fn assess(university: &University, monthly_budget_eur: u32) -> AffordabilityAssessment {
    let monthly_tuition_eur = (university.tuition_eur_per_year + 11) / 12;
    let monthly_living_eur = university.living_cost_eur_per_month;
    let total_monthly_eur = monthly_living_eur + monthly_tuition_eur;
    let margin_eur = i64::from(monthly_budget_eur) - i64::from(total_monthly_eur);

    let comfort_floor = (f64::from(monthly_budget_eur) * COMFORT_MARGIN_RATIO).round() as i64;
    let verdict = if margin_eur >= comfort_floor {
        AffordabilityVerdict::Comfortable
    } else if margin_eur >= 0 {
        AffordabilityVerdict::Tight
    } else {
        AffordabilityVerdict::OverBudget
    };

    AffordabilityAssessment {
        university_id: university.id.clone(),
        monthly_budget_eur,
        monthly_living_eur,
        monthly_tuition_eur,
        total_monthly_eur,
        margin_eur,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::StudyField;
    use crate::directory::{Funding, InstructionLanguage, UniversityId};

    fn university(tuition_eur_per_year: u32, living_cost_eur_per_month: u32) -> University {
        University {
            id: UniversityId("uni-test".to_string()),
            name: "Test University".to_string(),
            country: "Austria".to_string(),
            city: "Vienna".to_string(),
            fields: vec![StudyField::Sciences],
            languages: vec![InstructionLanguage::English],
            tuition_eur_per_year,
            living_cost_eur_per_month,
            application_deadline: None,
            funding: Funding::Public,
        }
    }

    #[test]
    fn tuition_is_spread_over_twelve_months_rounded_up() {
        let assessment = assess(&university(1000, 900), 2000);
        assert_eq!(assessment.monthly_tuition_eur, 84);
        assert_eq!(assessment.total_monthly_eur, 984);
    }

    #[test]
    fn generous_budget_is_comfortable() {
        let assessment = assess(&university(1200, 800), 1500);
        assert_eq!(assessment.verdict, AffordabilityVerdict::Comfortable);
        assert!(assessment.margin_eur > 0);
    }

    #[test]
    fn margin_exactly_at_comfort_floor_is_comfortable() {
        // Costs 850/month against a 1000 budget: margin 150 == 15% floor.
        let assessment = assess(&university(0, 850), 1000);
        assert_eq!(assessment.margin_eur, 150);
        assert_eq!(assessment.verdict, AffordabilityVerdict::Comfortable);
    }

    #[test]
    fn zero_margin_is_tight_not_over_budget() {
        let assessment = assess(&university(0, 1000), 1000);
        assert_eq!(assessment.margin_eur, 0);
        assert_eq!(assessment.verdict, AffordabilityVerdict::Tight);
    }

    #[test]
    fn shortfall_is_over_budget() {
        let assessment = assess(&university(12000, 1200), 1500);
        assert_eq!(assessment.verdict, AffordabilityVerdict::OverBudget);
        assert!(assessment.margin_eur < 0);
    }
}
