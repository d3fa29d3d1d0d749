//! Derived indicator computation
//!
//! Two in-place derivations over the shared record table: the overweight
//! flag computed from height and weight, and the binary recode of the
//! three-valued cholesterol/glucose markers. Callers that need the original
//! marker values must snapshot the table before invoking these.

use super::records::ExamRecord;

/// BMI above this threshold marks a record as overweight (boundary
/// exclusive: exactly 25.0 is not overweight)
pub const OVERWEIGHT_BMI_THRESHOLD: f64 = 25.0;

/// Computes body-mass index from height in centimeters and weight in
/// kilograms.
#[must_use]
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Recodes a three-valued marker (1 = normal, 2 = above normal, 3 = well
/// above normal) into a binary good/bad marker: 1 maps to 0, anything
/// greater maps to 1.
///
/// # Preconditions
/// Input values outside {1, 2, 3} are a precondition violation.
#[must_use]
pub fn recode_marker(value: u8) -> u8 {
    u8::from(value > 1)
}

/// Sets the overweight flag on every record from its height and weight.
///
/// Pure per-record derivation with no cross-record dependency; mutates the
/// table in place.
pub fn derive_overweight(records: &mut [ExamRecord]) {
    for record in records {
        record.overweight =
            u8::from(body_mass_index(record.height, record.weight) > OVERWEIGHT_BMI_THRESHOLD);
    }
}

/// Recodes the cholesterol and glucose markers of every record to binary
/// good/bad values, in place.
pub fn normalize_markers(records: &mut [ExamRecord]) {
    for record in records {
        record.cholesterol = recode_marker(record.cholesterol);
        record.gluc = recode_marker(record.gluc);
    }
}
