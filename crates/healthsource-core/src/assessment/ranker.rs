//! Doctor ranking.
//!
//! Filters a doctor collection down to eligible matches for a required
//! specialty set and ranks them: rating descending, then experience
//! descending. The sort is stable, so doctors tied on both keys keep the
//! order they arrived in from the directory query.

use crate::models::DoctorRecord;

/// Number of doctors returned to the caller.
const MAX_RESULTS: usize = 4;

/// Filter and rank doctors for a required specialty set.
///
/// A doctor is eligible when their specialty is in the set and they are both
/// active and online. An empty result is a normal outcome, not an error.
pub fn rank_doctors(specialties: &[String], doctors: Vec<DoctorRecord>) -> Vec<DoctorRecord> {
    let mut eligible: Vec<DoctorRecord> = doctors
        .into_iter()
        .filter(|d| d.is_active && d.is_online && specialties.iter().any(|s| *s == d.specialty))
        .collect();

    eligible.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.experience.cmp(&a.experience))
    });

    eligible.truncate(MAX_RESULTS);
    eligible
}
