//! Health risk assessment pipeline.
//!
//! Pipeline: Validation → Risk Scoring → {Recommendations, Specialty Matching → Doctor Ranking}
//!
//! Every stage is a pure function over immutable input; nothing here touches
//! storage or retains state across calls.

mod ranker;
mod recommend;
pub mod scoring;
mod specialty;
mod validate;

pub use ranker::*;
pub use recommend::*;
pub use scoring::{classify_risk, risk_factors, risk_score, MAX_RISK_SCORE};
pub use specialty::*;
pub use validate::*;

use thiserror::Error;

use crate::models::{RiskAssessment, VitalInput};

/// Vitals payload validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("vitals payload must be a JSON object")]
    NotAnObject,

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field is not a finite number: {0}")]
    NotANumber(String),

    #[error("gender must be one of male/female/other, got {0}")]
    InvalidGender(String),
}

/// Run the full scoring pipeline over validated vitals.
///
/// Deterministic: identical input always yields an identical assessment.
pub fn assess_vitals(input: &VitalInput) -> RiskAssessment {
    // Step 1: Evaluate the rule groups
    let factors = risk_factors(input);

    // Step 2: Clamp and classify the total
    let score = risk_score(&factors);
    let risk_level = classify_risk(score);

    // Step 3: Turn the factor list into guidance
    let recommendations = recommendations(&factors, &risk_level);

    RiskAssessment {
        risk_score: score,
        factors,
        risk_level,
        recommendations,
    }
}
