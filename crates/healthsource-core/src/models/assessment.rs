//! Risk assessment models.

use serde::{Deserialize, Serialize};

use super::VitalInput;

/// A single weighted contributor to the overall risk score, tied to one
/// vital-sign category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor {
    /// Human label (e.g., "Blood Pressure")
    pub factor: String,
    /// Non-negative weight contribution
    pub score: u32,
    /// Explanation shown alongside the factor
    pub description: String,
}

/// Coarse classification band derived from the numeric score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskLevel {
    /// Band name (e.g., "Low")
    pub level: String,
    /// Display color for the dashboard
    pub color: String,
    /// Band description
    pub description: String,
}

/// The computed result of one assessment run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Sum of factor scores, clamped to [0, 100]
    #[serde(rename = "riskScore")]
    pub risk_score: u32,
    /// Triggered factors in evaluation order
    pub factors: Vec<RiskFactor>,
    /// Classification of the score
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    /// Guidance strings, one per factor category plus a general one
    pub recommendations: Vec<String>,
}

/// Persisted form of an assessment. Created once per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessmentRecord {
    /// Record UUID
    pub id: String,
    /// Owning user
    #[serde(rename = "userId")]
    pub user_id: String,
    /// The computed assessment
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    /// Vitals the assessment was computed from
    #[serde(rename = "inputData")]
    pub input: VitalInput,
    /// Creation timestamp (RFC 3339)
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl RiskAssessmentRecord {
    /// Create a record for a freshly computed assessment.
    pub fn new(user_id: String, input: VitalInput, assessment: RiskAssessment) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            assessment,
            input,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
