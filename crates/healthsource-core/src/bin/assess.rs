//! One-shot assessment runner.
//!
//! Reads a vitals JSON payload from the file given as the first argument
//! (or stdin when absent), runs the pipeline, and prints the assessment
//! together with the derived specialty set.
//!
//! ```text
//! echo '{"heartRate":130,"systolicBP":150,"diastolicBP":95,
//!        "bmi":32,"age":65,"gender":"female"}' | assess
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use serde_json::json;

use healthsource_core::assessment::{assess_vitals, parse_vitals, required_specialties};

fn main() -> Result<()> {
    let payload = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read payload from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read payload from stdin")?;
            buf
        }
    };

    let value = serde_json::from_str(&payload).context("payload is not valid JSON")?;
    let input = parse_vitals(&value).context("invalid vitals payload")?;

    let assessment = assess_vitals(&input);
    let specialties = required_specialties(&assessment.factors, assessment.risk_score);

    let output = json!({
        "assessment": assessment,
        "requiredSpecialties": specialties,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
