//! Sea-level observation loading
//!
//! Loads the EPA sea-level CSV into observation records. Only the year and
//! the CSIRO-adjusted level are read; the error-bound and NOAA columns
//! present in the file are ignored.

use serde::Deserialize;
use std::path::Path;

use super::{Result, SeaLevelError};

/// A single (year, measured level) observation
///
/// Years are monotonically non-decreasing as loaded; no deduplication is
/// performed.
#[derive(Debug, Clone, Deserialize)]
pub struct SeaLevelObservation {
    /// Observation year
    #[serde(rename = "Year")]
    pub year: i32,
    /// CSIRO-adjusted sea level, in inches
    #[serde(rename = "CSIRO Adjusted Sea Level")]
    pub level: f64,
}

/// Loads all observations from a sea-level CSV file.
///
/// # Arguments
/// * `path` - Path to the CSV file (first row is the header)
///
/// # Returns
/// * `Ok(Vec<SeaLevelObservation>)` - All rows, in file order
/// * `Err(SeaLevelError)` - If the file cannot be read or a row fails to
///   deserialize
pub fn load_observations(path: &Path) -> Result<Vec<SeaLevelObservation>> {
    let mut reader = csv::Reader::from_path(path).map_err(SeaLevelError::Csv)?;

    let mut observations = Vec::new();
    for row in reader.deserialize() {
        let observation: SeaLevelObservation = row.map_err(SeaLevelError::Csv)?;
        observations.push(observation);
    }

    Ok(observations)
}
