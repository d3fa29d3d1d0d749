//! Long-form indicator aggregation
//!
//! Pivots the six binary indicator columns into (cardio, indicator, value)
//! tuples and counts the records behind each unique tuple, producing the
//! long-form table the grouped bar chart consumes.

use super::records::ExamRecord;
use std::collections::BTreeMap;

/// The indicator columns melted into long form, in output order
pub const INDICATOR_COLUMNS: [&str; 6] = [
    "active",
    "alco",
    "cholesterol",
    "gluc",
    "overweight",
    "smoke",
];

/// One row of the long-form count table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorCount {
    /// Cardio outcome label the row was split on
    pub cardio: u8,
    /// Name of the melted indicator column
    pub indicator: &'static str,
    /// Indicator value (0 or 1 after normalization)
    pub value: u8,
    /// Number of records with this (cardio, indicator, value) combination
    pub total: usize,
}

fn indicator_value(record: &ExamRecord, indicator: &str) -> u8 {
    match indicator {
        "active" => record.active,
        "alco" => record.alco,
        "cholesterol" => record.cholesterol,
        "gluc" => record.gluc,
        "overweight" => record.overweight,
        "smoke" => record.smoke,
        _ => unreachable!("unknown indicator column: {indicator}"),
    }
}

/// Counts records per unique (cardio, indicator, value) combination.
///
/// Grouping is exhaustive over the combinations present in the data;
/// combinations absent from the data produce no row (no zero-filling).
/// Output rows are sorted by cardio, indicator name, then value, so a given
/// input always yields the same row order.
///
/// Expects normalized records (overweight derived, markers recoded); run
/// the derivation step first.
#[must_use]
pub fn count_indicators(records: &[ExamRecord]) -> Vec<IndicatorCount> {
    let mut groups: BTreeMap<(u8, &'static str, u8), usize> = BTreeMap::new();

    for record in records {
        for indicator in INDICATOR_COLUMNS {
            let value = indicator_value(record, indicator);
            *groups.entry((record.cardio, indicator, value)).or_insert(0) += 1;
        }
    }

    groups
        .into_iter()
        .map(|((cardio, indicator, value), total)| IndicatorCount {
            cardio,
            indicator,
            value,
            total,
        })
        .collect()
}
