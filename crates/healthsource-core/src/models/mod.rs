//! Domain models for the healthsource system.

mod assessment;
mod doctor;
mod vitals;

pub use assessment::*;
pub use doctor::*;
pub use vitals::*;
