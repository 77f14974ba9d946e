//! Doctor directory queries.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::DoctorRecord;

fn doctor_from_row(row: &Row<'_>) -> rusqlite::Result<DoctorRecord> {
    Ok(DoctorRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        specialty: row.get(2)?,
        experience: row.get(3)?,
        rating: row.get(4)?,
        hospital: row.get(5)?,
        available_slots: row.get(6)?,
        consultation_fee: row.get(7)?,
        is_online: row.get(8)?,
        is_active: row.get(9)?,
    })
}

const DOCTOR_COLUMNS: &str = "id, name, specialty, experience, rating, hospital, \
                              available_slots, consultation_fee, is_online, is_active";

impl Database {
    /// Insert or replace a doctor listing.
    pub fn upsert_doctor(&self, doctor: &DoctorRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO doctors (
                id, name, specialty, experience, rating, hospital,
                available_slots, consultation_fee, is_online, is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                doctor.id,
                doctor.name,
                doctor.specialty,
                doctor.experience,
                doctor.rating,
                doctor.hospital,
                doctor.available_slots,
                doctor.consultation_fee,
                doctor.is_online,
                doctor.is_active,
            ],
        )?;
        Ok(())
    }

    /// Get a doctor by id.
    pub fn get_doctor(&self, id: &str) -> DbResult<Option<DoctorRecord>> {
        self.conn
            .query_row(
                &format!("SELECT {DOCTOR_COLUMNS} FROM doctors WHERE id = ?"),
                [id],
                doctor_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Find active, online doctors whose specialty is in the given set,
    /// ordered by rating then experience (descending).
    pub fn find_doctors(&self, specialties: &[String]) -> DbResult<Vec<DoctorRecord>> {
        if specialties.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; specialties.len()].join(", ");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors
             WHERE specialty IN ({placeholders})
               AND is_active = 1 AND is_online = 1
             ORDER BY rating DESC, experience DESC"
        ))?;

        let rows = stmt.query_map(
            rusqlite::params_from_iter(specialties.iter()),
            doctor_from_row,
        )?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List the whole directory.
    pub fn list_doctors(&self) -> DbResult<Vec<DoctorRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {DOCTOR_COLUMNS} FROM doctors ORDER BY name"))?;
        let rows = stmt.query_map([], doctor_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
