//! HealthSource Core Library
//!
//! Health risk assessment and doctor-matching core for the HealthSource
//! platform.
//!
//! # Architecture
//!
//! ```text
//! Vitals payload → Validation → Risk Scoring ──┬─→ Recommendations
//!                                              │
//!                                              └─→ Specialty Matching
//!                                                        │
//!                                              ┌─────────▼─────────┐
//!                                              │   Doctor Ranking  │
//!                                              │ filter + sort + 4 │
//!                                              └─────────┬─────────┘
//!                                                        │
//!                                                Ranked doctors
//! ```
//!
//! Every pipeline stage is a pure function; the only stateful operations are
//! persisting assessment records and reading the doctor directory, both
//! behind [`Database`].
//!
//! # Modules
//!
//! - [`assessment`]: the pure pipeline (validation, scoring, recommendations,
//!   specialty matching, doctor ranking)
//! - [`models`]: domain types (VitalInput, RiskAssessment, DoctorRecord, etc.)
//! - [`db`]: SQLite persistence for assessment history and the doctor directory

pub mod assessment;
pub mod db;
pub mod models;

// Re-export commonly used types
pub use assessment::{
    assess_vitals, parse_vitals, rank_doctors, required_specialties, ValidationError,
};
pub use db::Database;
pub use models::{
    DoctorRecord, Gender, RiskAssessment, RiskAssessmentRecord, RiskFactor, RiskLevel, VitalInput,
};

use serde_json::Value;

/// Top-level error taxonomy for the service facade.
#[derive(Debug, thiserror::Error)]
pub enum HealthRiskError {
    /// No verified identity was supplied by the caller.
    #[error("authentication required: no user identity supplied")]
    AuthRequired,

    /// Malformed or incomplete vitals payload.
    #[error("invalid vitals: {0}")]
    Validation(#[from] ValidationError),

    /// The storage collaborator failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] db::DbError),

    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Assessment service over a database.
///
/// One instance serves many independent requests; the pipeline itself holds
/// no state between calls.
pub struct HealthRiskService {
    db: Database,
}

impl HealthRiskService {
    /// Create a service over an already-open database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open a service with an on-disk database at the given path.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, HealthRiskError> {
        Ok(Self::new(Database::open(path)?))
    }

    /// Access the underlying database.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Run one assessment for an authenticated user and persist the record.
    ///
    /// The caller supplies the verified user id; an empty id is rejected with
    /// [`HealthRiskError::AuthRequired`] before any computation. BMI and all
    /// other vitals are taken from this payload, never from stored history.
    ///
    /// Durability policy: if the save fails the whole request fails, and the
    /// computed result is not returned.
    pub fn assess(&self, user_id: &str, payload: &Value) -> Result<RiskAssessment, HealthRiskError> {
        if user_id.trim().is_empty() {
            return Err(HealthRiskError::AuthRequired);
        }

        let input = parse_vitals(payload)?;
        let assessment = assess_vitals(&input);

        let record = RiskAssessmentRecord::new(user_id.into(), input, assessment);
        self.db.insert_assessment(&record)?;

        Ok(record.assessment)
    }

    /// Get the most recent assessment record for a user.
    pub fn latest_assessment(
        &self,
        user_id: &str,
    ) -> Result<Option<RiskAssessmentRecord>, HealthRiskError> {
        if user_id.trim().is_empty() {
            return Err(HealthRiskError::AuthRequired);
        }
        Ok(self.db.latest_assessment(user_id)?)
    }

    /// Rank doctors for an assessment already in hand.
    pub fn recommend_for(
        &self,
        assessment: &RiskAssessment,
    ) -> Result<Vec<DoctorRecord>, HealthRiskError> {
        let specialties = required_specialties(&assessment.factors, assessment.risk_score);
        let doctors = self.db.find_doctors(&specialties)?;
        Ok(rank_doctors(&specialties, doctors))
    }

    /// Rank doctors for a user's most recent stored assessment.
    pub fn recommended_doctors(&self, user_id: &str) -> Result<Vec<DoctorRecord>, HealthRiskError> {
        let record = self
            .latest_assessment(user_id)?
            .ok_or_else(|| HealthRiskError::NotFound(format!("no assessment for user {user_id}")))?;
        self.recommend_for(&record.assessment)
    }
}
