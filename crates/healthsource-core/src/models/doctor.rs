//! Doctor directory models.

use serde::{Deserialize, Serialize};

/// A doctor listing. Read-only from the assessment core's perspective;
/// maintained by the doctor-management side of the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorRecord {
    /// Directory id
    pub id: String,
    /// Display name
    pub name: String,
    /// Medical specialty (e.g., "Cardiologist")
    pub specialty: String,
    /// Years of experience
    pub experience: u32,
    /// Patient rating (0.0 - 5.0)
    pub rating: f64,
    /// Affiliated hospital
    pub hospital: String,
    /// Open consultation slots
    #[serde(rename = "availableSlots")]
    pub available_slots: u32,
    /// Consultation fee
    #[serde(rename = "consultationFee")]
    pub consultation_fee: f64,
    /// Currently reachable for consultation
    #[serde(rename = "isOnline")]
    pub is_online: bool,
    /// Listed in the directory
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
