//! SQLite schema definition.

/// Complete database schema for healthsource-core.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Risk Assessments (Append-Only - Immutable after creation)
-- ============================================================================

CREATE TABLE IF NOT EXISTS risk_assessments (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    risk_score INTEGER NOT NULL CHECK (risk_score BETWEEN 0 AND 100),
    factors TEXT NOT NULL DEFAULT '[]',           -- JSON array of RiskFactor
    risk_level TEXT NOT NULL,                     -- JSON object {level, color, description}
    recommendations TEXT NOT NULL DEFAULT '[]',   -- JSON array of strings
    input_data TEXT NOT NULL,                     -- JSON object (VitalInput)
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Latest-assessment lookups scan per user, newest first
CREATE INDEX IF NOT EXISTS idx_assessments_user_created
    ON risk_assessments(user_id, created_at DESC);

-- ============================================================================
-- Doctor Directory (maintained by the doctor-management collaborator)
-- ============================================================================

CREATE TABLE IF NOT EXISTS doctors (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    specialty TEXT NOT NULL,
    experience INTEGER NOT NULL DEFAULT 0,
    rating REAL NOT NULL DEFAULT 0,
    hospital TEXT NOT NULL DEFAULT '',
    available_slots INTEGER NOT NULL DEFAULT 0,
    consultation_fee REAL NOT NULL DEFAULT 0,
    is_online INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX IF NOT EXISTS idx_doctors_specialty ON doctors(specialty);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_risk_score_bounds_enforced() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        let result = conn.execute(
            "INSERT INTO risk_assessments (id, user_id, risk_score, risk_level, input_data)
             VALUES ('a1', 'u1', 120, '{}', '{}')",
            [],
        );
        assert!(result.is_err());

        let result = conn.execute(
            "INSERT INTO risk_assessments (id, user_id, risk_score, risk_level, input_data)
             VALUES ('a1', 'u1', 40, '{}', '{}')",
            [],
        );
        assert!(result.is_ok());
    }
}
