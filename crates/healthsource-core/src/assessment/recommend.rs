//! Recommendation generation.
//!
//! One fixed guidance string per factor category present, plus a general
//! recommendation appropriate to the risk level.

use crate::models::{RiskFactor, RiskLevel};

/// Guidance per factor category, keyed by the factor label.
const CATEGORY_GUIDANCE: [(&str, &str); 4] = [
    (
        "Blood Pressure",
        "Monitor blood pressure daily and limit sodium intake",
    ),
    (
        "Heart Rate",
        "Monitor heart rate regularly and consult a cardiologist",
    ),
    (
        "BMI",
        "Maintain a balanced diet and increase physical activity with professional guidance",
    ),
    (
        "Age",
        "Schedule regular comprehensive health checkups and age-appropriate screenings",
    ),
];

/// General guidance per risk level.
const LEVEL_GUIDANCE: [(&str, &str); 4] = [
    ("Low", "Maintain your current healthy habits and re-check vitals periodically"),
    ("Moderate", "Schedule a routine check-up with your primary care provider"),
    ("High", "Consult a healthcare provider soon to discuss a prevention plan"),
    ("Critical", "Seek medical attention within 24 hours"),
];

/// Build the recommendation list for an assessment.
///
/// With no triggered factors and a Low level this collapses to the single
/// maintain-healthy-habits message.
pub fn recommendations(factors: &[RiskFactor], risk_level: &RiskLevel) -> Vec<String> {
    let mut out: Vec<String> = CATEGORY_GUIDANCE
        .iter()
        .filter(|(category, _)| factors.iter().any(|f| f.factor == *category))
        .map(|(_, guidance)| (*guidance).into())
        .collect();

    let general = LEVEL_GUIDANCE
        .iter()
        .find(|(level, _)| risk_level.level == *level)
        .map(|(_, guidance)| *guidance)
        .unwrap_or(LEVEL_GUIDANCE[0].1);
    out.push(general.into());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scoring::classify_risk;

    fn named_factor(label: &str, score: u32) -> RiskFactor {
        RiskFactor {
            factor: label.into(),
            score,
            description: String::new(),
        }
    }

    #[test]
    fn test_no_factors_low_level() {
        let recs = recommendations(&[], &classify_risk(0));
        assert_eq!(
            recs,
            ["Maintain your current healthy habits and re-check vitals periodically"]
        );
    }

    #[test]
    fn test_one_guidance_per_category() {
        let factors = [
            named_factor("Blood Pressure", 25),
            named_factor("Heart Rate", 20),
        ];
        let recs = recommendations(&factors, &classify_risk(45));
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("blood pressure"));
        assert!(recs[1].contains("heart rate"));
        assert_eq!(recs[2], "Schedule a routine check-up with your primary care provider");
    }

    #[test]
    fn test_critical_general_guidance() {
        let factors = [named_factor("BMI", 30)];
        let recs = recommendations(&factors, &classify_risk(80));
        assert_eq!(recs.last().unwrap(), "Seek medical attention within 24 hours");
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        // Two factors with the same label still yield one guidance string.
        let factors = [named_factor("BMI", 10), named_factor("BMI", 20)];
        let recs = recommendations(&factors, &classify_risk(30));
        assert_eq!(recs.len(), 2);
    }
}
