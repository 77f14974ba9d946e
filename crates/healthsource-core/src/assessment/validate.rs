//! Vitals payload validation.
//!
//! Checks presence and shape only. Out-of-physiological-range values are
//! accepted here and weighted by the scoring engine.

use serde_json::Value;

use super::ValidationError;
use crate::models::{Gender, VitalInput};

/// The five numeric wire keys, in payload order.
const NUMERIC_FIELDS: [&str; 5] = ["heartRate", "systolicBP", "diastolicBP", "bmi", "age"];

/// Validate a candidate payload and extract the six vital fields.
///
/// Fails naming the offending field if any field is absent or null, a numeric
/// field is not a finite number, or `gender` is not one of
/// `male`/`female`/`other`.
pub fn parse_vitals(payload: &Value) -> Result<VitalInput, ValidationError> {
    let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let mut numbers = [0.0f64; NUMERIC_FIELDS.len()];
    for (slot, field) in numbers.iter_mut().zip(NUMERIC_FIELDS) {
        let value = object
            .get(field)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ValidationError::MissingField(field.into()))?;
        let number = value
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ValidationError::NotANumber(field.into()))?;
        *slot = number;
    }

    let gender_value = object
        .get("gender")
        .filter(|v| !v.is_null())
        .ok_or_else(|| ValidationError::MissingField("gender".into()))?;
    let gender = gender_value
        .as_str()
        .and_then(Gender::parse)
        .ok_or_else(|| ValidationError::InvalidGender(gender_value.to_string()))?;

    let [heart_rate, systolic_bp, diastolic_bp, bmi, age] = numbers;
    Ok(VitalInput {
        heart_rate,
        systolic_bp,
        diastolic_bp,
        bmi,
        age,
        gender,
    })
}
