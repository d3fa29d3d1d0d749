//! Patient examination record loading
//!
//! Loads the medical examination CSV into record structs. The derived
//! `overweight` field is not present in the file and defaults to 0 until
//! [`crate::medical::derive::derive_overweight`] fills it in.

use serde::Deserialize;
use std::path::Path;

use super::{MedicalError, Result};

/// A single patient examination record
///
/// The table is mutated in place by the derivation step: `overweight` is
/// filled in from height/weight, and `cholesterol`/`gluc` are recoded from
/// their three-valued form to binary good/bad markers. Downstream consumers
/// observe post-normalization values only.
#[derive(Debug, Clone, Deserialize)]
pub struct ExamRecord {
    /// Row identifier from the source file
    pub id: u32,
    /// Age in days
    pub age: u32,
    /// Gender code (1 or 2 in the source data)
    pub gender: u8,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Systolic blood pressure
    pub ap_hi: i32,
    /// Diastolic blood pressure
    pub ap_lo: i32,
    /// Cholesterol marker: 1/2/3 as loaded, 0/1 after normalization
    pub cholesterol: u8,
    /// Glucose marker: 1/2/3 as loaded, 0/1 after normalization
    pub gluc: u8,
    /// Smoking flag
    pub smoke: u8,
    /// Alcohol intake flag
    pub alco: u8,
    /// Physical activity flag
    pub active: u8,
    /// Presence of cardiovascular disease (outcome label)
    pub cardio: u8,
    /// Overweight indicator, derived from height and weight (not in the CSV)
    #[serde(default)]
    pub overweight: u8,
}

/// Loads all examination records from a CSV file.
///
/// # Arguments
/// * `path` - Path to the CSV file (first row is the header)
///
/// # Returns
/// * `Ok(Vec<ExamRecord>)` - All rows, in file order
/// * `Err(MedicalError)` - If the file cannot be read or a row fails to
///   deserialize
pub fn load_records(path: &Path) -> Result<Vec<ExamRecord>> {
    let mut reader = csv::Reader::from_path(path).map_err(MedicalError::Csv)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ExamRecord = row.map_err(MedicalError::Csv)?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_records_defaults_overweight() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "id,age,gender,height,weight,ap_hi,ap_lo,cholesterol,gluc,smoke,alco,active,cardio"
        )
        .unwrap();
        writeln!(file, "0,18393,2,168,62.0,110,80,1,1,0,0,1,0").unwrap();
        writeln!(file, "1,20228,1,156,85.0,140,90,3,1,0,0,1,1").unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].height, 168.0);
        assert_eq!(records[0].weight, 62.0);
        assert_eq!(records[0].overweight, 0);
        assert_eq!(records[1].cholesterol, 3);
        assert_eq!(records[1].cardio, 1);
    }

    #[test]
    fn test_load_records_missing_file() {
        let result = load_records(Path::new("does-not-exist.csv"));
        assert!(matches!(result, Err(MedicalError::Csv(_))));
    }
}
