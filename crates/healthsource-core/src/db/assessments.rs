//! Risk assessment persistence.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{RiskAssessment, RiskAssessmentRecord};

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<RiskAssessmentRecord> {
    let factors_json: String = row.get(3)?;
    let risk_level_json: String = row.get(4)?;
    let recommendations_json: String = row.get(5)?;
    let input_json: String = row.get(6)?;

    let to_sqlite_err = |e: serde_json::Error| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    };

    Ok(RiskAssessmentRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        assessment: RiskAssessment {
            risk_score: row.get(2)?,
            factors: serde_json::from_str(&factors_json).map_err(to_sqlite_err)?,
            risk_level: serde_json::from_str(&risk_level_json).map_err(to_sqlite_err)?,
            recommendations: serde_json::from_str(&recommendations_json).map_err(to_sqlite_err)?,
        },
        input: serde_json::from_str(&input_json).map_err(to_sqlite_err)?,
        created_at: row.get(7)?,
    })
}

const RECORD_COLUMNS: &str = "id, user_id, risk_score, factors, risk_level, \
                              recommendations, input_data, created_at";

impl Database {
    /// Insert a new assessment record. Records are append-only.
    pub fn insert_assessment(&self, record: &RiskAssessmentRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO risk_assessments (
                id, user_id, risk_score, factors, risk_level,
                recommendations, input_data, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                record.id,
                record.user_id,
                record.assessment.risk_score,
                serde_json::to_string(&record.assessment.factors)?,
                serde_json::to_string(&record.assessment.risk_level)?,
                serde_json::to_string(&record.assessment.recommendations)?,
                serde_json::to_string(&record.input)?,
                record.created_at,
            ],
        )?;
        Ok(())
    }

    /// Get an assessment by id.
    pub fn get_assessment(&self, id: &str) -> DbResult<Option<RiskAssessmentRecord>> {
        self.conn
            .query_row(
                &format!("SELECT {RECORD_COLUMNS} FROM risk_assessments WHERE id = ?"),
                [id],
                record_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Get the most recent assessment for a user.
    ///
    /// Same-timestamp records resolve to the most recently inserted (rowid).
    pub fn latest_assessment(&self, user_id: &str) -> DbResult<Option<RiskAssessmentRecord>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {RECORD_COLUMNS} FROM risk_assessments
                     WHERE user_id = ?
                     ORDER BY created_at DESC, rowid DESC
                     LIMIT 1"
                ),
                [user_id],
                record_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all assessments for a user, newest first.
    pub fn list_assessments(&self, user_id: &str) -> DbResult<Vec<RiskAssessmentRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM risk_assessments
             WHERE user_id = ?
             ORDER BY created_at DESC, rowid DESC"
        ))?;

        let rows = stmt.query_map([user_id], record_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
