//! Risk scoring engine.
//!
//! Four rule groups evaluated in a fixed order — blood pressure, heart rate,
//! BMI, age — each classifying one vital against ordered severity bands.
//! A band appends a [`RiskFactor`] only when it contributes a non-zero score;
//! vitals inside their normal range leave no trace in the output.
//!
//! The total score is the clamped sum of contributions, and the risk level is
//! a pure function of that score via [`RISK_LEVEL_BANDS`].

use crate::models::{RiskFactor, RiskLevel, VitalInput};

/// Upper clamp for the total risk score.
pub const MAX_RISK_SCORE: u32 = 100;

/// Score above which a factor is considered severe enough for specialist
/// referral (shared with the specialty matcher).
pub const SPECIALIST_THRESHOLD: u32 = 10;

/// Risk-level bands over the clamped score: (inclusive upper bound, level,
/// color, description). Scanned in order; the last row covers the rest.
pub const RISK_LEVEL_BANDS: [(u32, &str, &str, &str); 4] = [
    (
        24,
        "Low",
        "green",
        "Your health metrics indicate low cardiovascular risk. Continue maintaining healthy habits.",
    ),
    (
        49,
        "Moderate",
        "yellow",
        "Some risk factors are present. Consider lifestyle modifications and regular monitoring.",
    ),
    (
        74,
        "High",
        "orange",
        "Multiple risk factors detected. Medical consultation and intervention may be beneficial.",
    ),
    (
        MAX_RISK_SCORE,
        "Critical",
        "red",
        "Critical health risk levels detected. Urgent medical evaluation and intervention required.",
    ),
];

/// Evaluate all rule groups against the vitals, in evaluation order.
pub fn risk_factors(input: &VitalInput) -> Vec<RiskFactor> {
    [
        blood_pressure_factor(input.systolic_bp, input.diastolic_bp),
        heart_rate_factor(input.heart_rate),
        bmi_factor(input.bmi),
        age_factor(input.age),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Sum of factor contributions, clamped to `[0, MAX_RISK_SCORE]`.
pub fn risk_score(factors: &[RiskFactor]) -> u32 {
    factors
        .iter()
        .map(|f| f.score)
        .sum::<u32>()
        .min(MAX_RISK_SCORE)
}

/// Classify a clamped score against the fixed risk-level bands.
pub fn classify_risk(score: u32) -> RiskLevel {
    let (_, level, color, description) = RISK_LEVEL_BANDS
        .iter()
        .find(|(upper, ..)| score <= *upper)
        .unwrap_or(&RISK_LEVEL_BANDS[RISK_LEVEL_BANDS.len() - 1]);
    RiskLevel {
        level: (*level).into(),
        color: (*color).into(),
        description: (*description).into(),
    }
}

/// Blood pressure bands per clinical classification.
///
/// The hypertension ladder (most severe first) and the hypotension band are
/// evaluated independently; a reading can sit in both (e.g. 125/55), and the
/// larger contribution wins so that pushing either value further from normal
/// never lowers the score. Normal (below 120/80, at or above 90/60)
/// contributes nothing.
fn blood_pressure_factor(systolic: f64, diastolic: f64) -> Option<RiskFactor> {
    let hypertensive = match (systolic, diastolic) {
        (s, d) if s >= 180.0 || d >= 120.0 => {
            Some((35, "Hypertensive Crisis - immediate medical attention required"))
        }
        (s, d) if s >= 140.0 || d >= 90.0 => {
            Some((25, "Stage 2 Hypertension - medical treatment likely needed"))
        }
        (s, d) if s >= 130.0 || d >= 80.0 => {
            Some((15, "Stage 1 Hypertension - medical consultation advised"))
        }
        (s, _) if s >= 120.0 => {
            Some((5, "Elevated blood pressure - lifestyle changes recommended"))
        }
        _ => None,
    };
    let hypotensive = (systolic < 90.0 || diastolic < 60.0)
        .then_some((10, "Low blood pressure - may cause dizziness"));

    let (score, description) = match (hypertensive, hypotensive) {
        (Some(high), Some(low)) => {
            if high.0 >= low.0 {
                high
            } else {
                low
            }
        }
        (Some(high), None) => high,
        (None, Some(low)) => low,
        (None, None) => return None,
    };
    Some(factor("Blood Pressure", score, description))
}

/// Resting heart rate bands; 60-100 bpm is the normal range.
fn heart_rate_factor(heart_rate: f64) -> Option<RiskFactor> {
    let (score, description) = match heart_rate {
        hr if hr < 50.0 => (15, "Bradycardia - unusually low heart rate"),
        hr if hr < 60.0 => (8, "Lower resting heart rate - monitor for symptoms"),
        hr if hr <= 100.0 => return None,
        hr if hr <= 120.0 => (12, "Elevated heart rate - may indicate stress or poor fitness"),
        hr if hr <= 150.0 => (20, "High heart rate - medical evaluation recommended"),
        _ => (25, "Very high heart rate - immediate medical attention needed"),
    };
    Some(factor("Heart Rate", score, description))
}

/// BMI bands; 18.5-24.9 is the normal range.
fn bmi_factor(bmi: f64) -> Option<RiskFactor> {
    let (score, description) = match bmi {
        b if b < 18.5 => (10, "Underweight - may indicate malnutrition"),
        b if b < 25.0 => return None,
        b if b < 30.0 => (10, "Overweight - increased health risks"),
        b if b < 35.0 => (20, "Obesity Class I - significant health risks"),
        b if b < 40.0 => (25, "Obesity Class II - severe health risks"),
        _ => (30, "Obesity Class III - extreme health risks"),
    };
    Some(factor("BMI", score, description))
}

/// Baseline risk elevation with age; no contribution at or below 60.
fn age_factor(age: f64) -> Option<RiskFactor> {
    let (score, description) = match age {
        a if a > 70.0 => (15, "Advanced age - comprehensive care needed"),
        a if a > 60.0 => (10, "Senior age - increased cardiovascular risk"),
        _ => return None,
    };
    Some(factor("Age", score, description))
}

fn factor(label: &str, score: u32, description: &str) -> RiskFactor {
    RiskFactor {
        factor: label.into(),
        score,
        description: description.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use proptest::prelude::*;

    fn vitals(hr: f64, sys: f64, dia: f64, bmi: f64, age: f64) -> VitalInput {
        VitalInput {
            heart_rate: hr,
            systolic_bp: sys,
            diastolic_bp: dia,
            bmi,
            age,
            gender: Gender::Other,
        }
    }

    #[test]
    fn test_healthy_vitals_trigger_nothing() {
        let factors = risk_factors(&vitals(75.0, 118.0, 76.0, 22.0, 30.0));
        assert!(factors.is_empty());
        assert_eq!(risk_score(&factors), 0);
        assert_eq!(classify_risk(0).level, "Low");
    }

    #[test]
    fn test_blood_pressure_bands() {
        let cases = [
            (118.0, 76.0, None),
            (125.0, 76.0, Some(5)),
            (132.0, 76.0, Some(15)),
            (118.0, 84.0, Some(15)),
            (150.0, 95.0, Some(25)),
            (118.0, 95.0, Some(25)),
            (185.0, 95.0, Some(35)),
            (150.0, 125.0, Some(35)),
            (85.0, 70.0, Some(10)),
            (110.0, 55.0, Some(10)),
            (125.0, 55.0, Some(10)),
            (132.0, 55.0, Some(15)),
        ];
        for (sys, dia, expected) in cases {
            let got = blood_pressure_factor(sys, dia).map(|f| f.score);
            assert_eq!(got, expected, "bp {sys}/{dia}");
        }
    }

    #[test]
    fn test_low_diastolic_not_outscored_by_elevated_systolic() {
        // With diastolic held hypotensive, raising systolic into the elevated
        // band must not drop the contribution below the hypotension score.
        let at_119 = blood_pressure_factor(119.0, 55.0).unwrap().score;
        let at_125 = blood_pressure_factor(125.0, 55.0).unwrap().score;
        assert_eq!(at_119, 10);
        assert!(at_125 >= at_119, "119/55 -> {at_119}, 125/55 -> {at_125}");
    }

    #[test]
    fn test_stage_two_wins_over_stage_one() {
        // 145/85 matches both stage bands; the more severe one applies.
        let f = blood_pressure_factor(145.0, 85.0).unwrap();
        assert_eq!(f.score, 25);
    }

    #[test]
    fn test_heart_rate_bands() {
        let cases = [
            (45.0, Some(15)),
            (55.0, Some(8)),
            (60.0, None),
            (100.0, None),
            (110.0, Some(12)),
            (130.0, Some(20)),
            (160.0, Some(25)),
        ];
        for (hr, expected) in cases {
            assert_eq!(heart_rate_factor(hr).map(|f| f.score), expected, "hr {hr}");
        }
    }

    #[test]
    fn test_bmi_bands() {
        let cases = [
            (17.0, Some(10)),
            (18.5, None),
            (22.0, None),
            (25.0, Some(10)),
            (32.0, Some(20)),
            (37.0, Some(25)),
            (42.0, Some(30)),
        ];
        for (bmi, expected) in cases {
            assert_eq!(bmi_factor(bmi).map(|f| f.score), expected, "bmi {bmi}");
        }
    }

    #[test]
    fn test_age_bands() {
        assert_eq!(age_factor(30.0), None);
        assert_eq!(age_factor(60.0), None);
        assert_eq!(age_factor(65.0).map(|f| f.score), Some(10));
        assert_eq!(age_factor(75.0).map(|f| f.score), Some(15));
    }

    #[test]
    fn test_factor_order_is_evaluation_order() {
        let factors = risk_factors(&vitals(130.0, 150.0, 95.0, 32.0, 65.0));
        let labels: Vec<&str> = factors.iter().map(|f| f.factor.as_str()).collect();
        assert_eq!(labels, ["Blood Pressure", "Heart Rate", "BMI", "Age"]);
    }

    #[test]
    fn test_score_clamped_at_100() {
        // Worst band in every group sums past the clamp
        let factors = risk_factors(&vitals(200.0, 200.0, 130.0, 45.0, 80.0));
        assert_eq!(
            factors.iter().map(|f| f.score).sum::<u32>(),
            35 + 25 + 30 + 15
        );
        assert_eq!(risk_score(&factors), 100);
    }

    #[test]
    fn test_risk_level_band_edges() {
        for (score, expected) in [
            (0, "Low"),
            (24, "Low"),
            (25, "Moderate"),
            (49, "Moderate"),
            (50, "High"),
            (74, "High"),
            (75, "Critical"),
            (100, "Critical"),
        ] {
            assert_eq!(classify_risk(score).level, expected, "score {score}");
        }
    }

    #[test]
    fn test_idempotent() {
        let input = vitals(130.0, 150.0, 95.0, 32.0, 65.0);
        let first = risk_factors(&input);
        let second = risk_factors(&input);
        assert_eq!(first, second);
        assert_eq!(risk_score(&first), risk_score(&second));
    }

    proptest! {
        #[test]
        fn prop_score_bounded(
            hr in 0.0f64..300.0,
            sys in 0.0f64..300.0,
            dia in 0.0f64..200.0,
            bmi in 5.0f64..80.0,
            age in 0.0f64..120.0,
        ) {
            let factors = risk_factors(&vitals(hr, sys, dia, bmi, age));
            let score = risk_score(&factors);
            prop_assert!(score <= MAX_RISK_SCORE);
            for factor in &factors {
                prop_assert!(factor.score > 0, "zero-score factor emitted: {factor:?}");
            }
        }

        #[test]
        fn prop_systolic_monotonic(
            base in 120.0f64..280.0,
            delta in 0.0f64..20.0,
            dia in 40.0f64..130.0,
        ) {
            // Holding everything else fixed (including hypotensive or
            // hypertensive diastolics), pushing systolic further from the
            // normal band never lowers the score.
            let lower = risk_score(&risk_factors(&vitals(75.0, base, dia, 22.0, 30.0)));
            let higher = risk_score(&risk_factors(&vitals(75.0, base + delta, dia, 22.0, 30.0)));
            prop_assert!(higher >= lower);
        }

        #[test]
        fn prop_level_deterministic(score in 0u32..=100) {
            prop_assert_eq!(classify_risk(score), classify_risk(score));
        }
    }
}
