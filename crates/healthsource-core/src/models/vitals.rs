//! Vital-sign input models.

use serde::{Deserialize, Serialize};

/// Patient gender as submitted with a vitals payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse the lowercase wire form ("male", "female", "other").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    /// Wire form of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// The six raw physiological measurements submitted for assessment.
///
/// Field keys on the wire are camelCase and case-sensitive
/// (`heartRate`, `systolicBP`, `diastolicBP`, `bmi`, `age`, `gender`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalInput {
    /// Resting heart rate in bpm
    #[serde(rename = "heartRate")]
    pub heart_rate: f64,
    /// Systolic blood pressure in mmHg
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    /// Diastolic blood pressure in mmHg
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,
    /// Body mass index
    pub bmi: f64,
    /// Age in years
    pub age: f64,
    /// Gender
    pub gender: Gender,
}
