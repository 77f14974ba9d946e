//! Specialty matching.
//!
//! Maps triggered risk factors and the overall score to the set of medical
//! specialties required to treat them. Rules are order-independent; the
//! output is deduplicated and presented first-triggered-first so results are
//! reproducible.

use crate::models::RiskFactor;

use super::scoring::SPECIALIST_THRESHOLD;

/// Baseline specialty included in every result.
pub const BASELINE_SPECIALTY: &str = "General Physician";

/// Overall score above which internal medicine is always required.
const INTERNAL_MEDICINE_SCORE: u32 = 50;

/// Factor-driven rule rows: (label substring, specialties added when a factor
/// with that label scores above [`SPECIALIST_THRESHOLD`]).
const FACTOR_RULES: [(&str, &[&str]); 3] = [
    ("Blood Pressure", &["Cardiologist", "Internal Medicine"]),
    ("Heart Rate", &["Cardiac Electrophysiologist", "Cardiologist"]),
    ("BMI", &["Endocrinologist", "Nutritionist"]),
];

/// Derive the required specialties for a set of factors and overall score.
///
/// Low-severity factors (score at or below the threshold) only warrant the
/// baseline physician, never a specialist referral.
pub fn required_specialties(factors: &[RiskFactor], risk_score: u32) -> Vec<String> {
    let mut specialties: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !specialties.iter().any(|s| s == name) {
            specialties.push(name.into());
        }
    };

    for factor in factors {
        if factor.score <= SPECIALIST_THRESHOLD {
            continue;
        }
        for (label, additions) in FACTOR_RULES {
            if factor.factor.contains(label) {
                for specialty in additions {
                    push(specialty);
                }
            }
        }
    }

    push(BASELINE_SPECIALTY);

    if risk_score > INTERNAL_MEDICINE_SCORE {
        push("Internal Medicine");
    }

    specialties
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_factor(label: &str, score: u32) -> RiskFactor {
        RiskFactor {
            factor: label.into(),
            score,
            description: String::new(),
        }
    }

    #[test]
    fn test_always_includes_baseline() {
        assert_eq!(required_specialties(&[], 0), [BASELINE_SPECIALTY]);
    }

    #[test]
    fn test_low_severity_factor_stays_general() {
        let factors = [named_factor("Blood Pressure", 10)];
        assert_eq!(required_specialties(&factors, 10), [BASELINE_SPECIALTY]);
    }

    #[test]
    fn test_blood_pressure_referral() {
        let factors = [named_factor("Blood Pressure", 15)];
        assert_eq!(
            required_specialties(&factors, 15),
            ["Cardiologist", "Internal Medicine", BASELINE_SPECIALTY]
        );
    }

    #[test]
    fn test_high_score_adds_internal_medicine() {
        let factors = [named_factor("Heart Rate", 25), named_factor("BMI", 30)];
        let specialties = required_specialties(&factors, 55);
        assert_eq!(
            specialties,
            [
                "Cardiac Electrophysiologist",
                "Cardiologist",
                "Endocrinologist",
                "Nutritionist",
                BASELINE_SPECIALTY,
                "Internal Medicine",
            ]
        );
    }

    #[test]
    fn test_internal_medicine_not_duplicated() {
        // Triggered both by the blood-pressure rule and the overall score.
        let factors = [named_factor("Blood Pressure", 35)];
        let specialties = required_specialties(&factors, 60);
        let count = specialties.iter().filter(|s| *s == "Internal Medicine").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_cardiologist_not_duplicated() {
        let factors = [
            named_factor("Blood Pressure", 25),
            named_factor("Heart Rate", 20),
        ];
        let specialties = required_specialties(&factors, 45);
        let count = specialties.iter().filter(|s| *s == "Cardiologist").count();
        assert_eq!(count, 1);
    }
}
