//! SQLite persistence for healthsource-core.
//!
//! Assessment records are append-only: inserted once per request and never
//! mutated. The doctor directory is read-mostly here; its contents are
//! maintained by the doctor-management side of the platform.

mod assessments;
mod doctors;
mod schema;

#[allow(unused_imports)]
pub use assessments::*;
#[allow(unused_imports)]
pub use doctors::*;
pub use schema::*;

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced by the persistence layer. Absent records are reported as
/// `Ok(None)` by the accessors, not as errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON column error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DbResult<T> = Result<T, DbError>;

/// Owned SQLite connection with the healthsource schema applied.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create an in-memory database, used throughout the tests.
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Raw connection access for queries the accessors don't cover.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
