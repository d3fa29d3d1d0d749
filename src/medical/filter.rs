//! Physiological plausibility filter
//!
//! Drops records that represent measurement errors before the correlation
//! analysis: diastolic pressure above systolic, and heights or weights
//! outside the central 95% of their distributions.
//!
//! All three conditions are evaluated simultaneously against the same
//! table, so the percentile cutoffs are computed once from the original
//! unfiltered height/weight distributions, never from progressively
//! narrowed ones.

use super::records::ExamRecord;
use crate::stats::quantile;

/// Lower percentile cutoff for the height and weight bands (inclusive)
pub const LOWER_PERCENTILE: f64 = 0.025;

/// Upper percentile cutoff for the height and weight bands (inclusive)
pub const UPPER_PERCENTILE: f64 = 0.975;

/// Returns the records that pass all physiological plausibility checks.
///
/// A record is retained when all of the following hold:
/// - diastolic pressure does not exceed systolic (`ap_lo <= ap_hi`)
/// - height lies within the inclusive [2.5th, 97.5th] percentile band of
///   the unfiltered height distribution
/// - weight lies within the inclusive [2.5th, 97.5th] percentile band of
///   the unfiltered weight distribution
///
/// The input table is not mutated; a new filtered table is returned.
#[must_use]
pub fn physiological_subset(records: &[ExamRecord]) -> Vec<ExamRecord> {
    if records.is_empty() {
        return Vec::new();
    }

    let heights: Vec<f64> = records.iter().map(|record| record.height).collect();
    let weights: Vec<f64> = records.iter().map(|record| record.weight).collect();

    let height_low = quantile(&heights, LOWER_PERCENTILE);
    let height_high = quantile(&heights, UPPER_PERCENTILE);
    let weight_low = quantile(&weights, LOWER_PERCENTILE);
    let weight_high = quantile(&weights, UPPER_PERCENTILE);

    records
        .iter()
        .filter(|record| {
            record.ap_lo <= record.ap_hi
                && record.height >= height_low
                && record.height <= height_high
                && record.weight >= weight_low
                && record.weight <= weight_high
        })
        .cloned()
        .collect()
}
