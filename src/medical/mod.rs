//! Medical examination pipeline
//!
//! Loads patient examination records, derives the overweight flag and the
//! binary cholesterol/glucose markers in place, then produces the two chart
//! artifacts: a grouped indicator count chart split by cardio outcome, and
//! a masked correlation heatmap over the physiologically filtered table.

pub mod aggregate;
pub mod derive;
pub mod filter;
pub mod records;

pub use aggregate::{count_indicators, IndicatorCount, INDICATOR_COLUMNS};
pub use derive::{derive_overweight, normalize_markers};
pub use filter::physiological_subset;
pub use records::{load_records, ExamRecord};

use crate::charts::categorical::{render_indicator_chart, CATPLOT_FILENAME};
use crate::charts::heatmap::{render_heatmap, HEATMAP_FILENAME};
use crate::charts::PlotError;
use crate::stats::{correlation_matrix, CorrelationMatrix};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in the medical examination pipeline
#[derive(Error, Debug)]
pub enum MedicalError {
    #[error("Failed to read records: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to generate plot: {0}")]
    Plot(#[from] PlotError),

    #[error("No records remain after physiological filtering")]
    EmptyFilteredTable,
}

pub(crate) type Result<T> = core::result::Result<T, MedicalError>;

/// In-memory model of the rendered indicator count chart
///
/// Returned by [`generate_indicator_chart`] alongside the saved PNG.
#[derive(Debug, Clone)]
pub struct IndicatorChart {
    /// Long-form (cardio, indicator, value, total) rows, in deterministic
    /// order
    pub counts: Vec<IndicatorCount>,
    /// Path of the saved PNG
    pub output_path: PathBuf,
}

/// In-memory model of the rendered correlation heatmap
///
/// Returned by [`generate_correlation_heatmap`] alongside the saved PNG.
#[derive(Debug, Clone)]
pub struct HeatmapChart {
    /// Pairwise correlation matrix over the filtered table
    pub matrix: CorrelationMatrix,
    /// Upper-triangle mask applied when rendering
    pub mask: Vec<Vec<bool>>,
    /// Number of records that survived the physiological filter
    pub filtered_rows: usize,
    /// Path of the saved PNG
    pub output_path: PathBuf,
}

/// Numeric column view of the record table, in CSV column order with the
/// derived overweight flag last.
///
/// This is the column set the correlation matrix is computed over; it
/// deliberately includes `id`, matching the source analysis.
#[must_use]
pub fn numeric_columns(records: &[ExamRecord]) -> Vec<(String, Vec<f64>)> {
    let column = |name: &str, extract: fn(&ExamRecord) -> f64| -> (String, Vec<f64>) {
        (name.to_string(), records.iter().map(extract).collect())
    };

    vec![
        column("id", |r| f64::from(r.id)),
        column("age", |r| f64::from(r.age)),
        column("gender", |r| f64::from(r.gender)),
        column("height", |r| r.height),
        column("weight", |r| r.weight),
        column("ap_hi", |r| f64::from(r.ap_hi)),
        column("ap_lo", |r| f64::from(r.ap_lo)),
        column("cholesterol", |r| f64::from(r.cholesterol)),
        column("gluc", |r| f64::from(r.gluc)),
        column("smoke", |r| f64::from(r.smoke)),
        column("alco", |r| f64::from(r.alco)),
        column("active", |r| f64::from(r.active)),
        column("cardio", |r| f64::from(r.cardio)),
        column("overweight", |r| f64::from(r.overweight)),
    ]
}

/// Aggregates the indicator counts, renders the grouped bar chart, and
/// saves it as `catplot.png` in `output_dir`.
///
/// Expects normalized records (overweight derived, markers recoded).
///
/// # Returns
/// * `Ok(IndicatorChart)` - The chart model that was rendered
/// * `Err(MedicalError)` - If rendering or saving failed
pub fn generate_indicator_chart(
    records: &[ExamRecord],
    output_dir: &Path,
) -> Result<IndicatorChart> {
    let counts = count_indicators(records);

    let output_path = output_dir.join(CATPLOT_FILENAME);
    render_indicator_chart(&counts, &output_path)?;

    Ok(IndicatorChart {
        counts,
        output_path,
    })
}

/// Filters the table, computes the correlation matrix and its mask, renders
/// the heatmap, and saves it as `heatmap.png` in `output_dir`.
///
/// Expects normalized records (overweight derived, markers recoded).
///
/// # Returns
/// * `Ok(HeatmapChart)` - The chart model that was rendered
/// * `Err(MedicalError)` - If no records survive the physiological filter,
///   or if rendering or saving failed
pub fn generate_correlation_heatmap(
    records: &[ExamRecord],
    output_dir: &Path,
) -> Result<HeatmapChart> {
    let filtered = physiological_subset(records);
    if filtered.is_empty() {
        return Err(MedicalError::EmptyFilteredTable);
    }

    let matrix = correlation_matrix(&numeric_columns(&filtered));
    let mask = matrix.upper_triangle_mask();

    let output_path = output_dir.join(HEATMAP_FILENAME);
    render_heatmap(&matrix, &mask, &output_path)?;

    Ok(HeatmapChart {
        matrix,
        mask,
        filtered_rows: filtered.len(),
        output_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal four-record table with hand-computed reference values:
    ///
    /// | id | height | weight |  BMI  | overweight | chol | gluc | ap      |
    /// |----|--------|--------|-------|------------|------|------|---------|
    /// | 1  | 150    | 50     | 22.22 | 0          | 1->0 | 3->1 | 120/80  |
    /// | 2  | 160    | 65     | 25.39 | 1          | 2->1 | 1->0 | 130/85  |
    /// | 3  | 170    | 80     | 27.68 | 1          | 3->1 | 2->1 | 110/120 |
    /// | 4  | 180    | 95     | 29.32 | 1          | 1->0 | 1->0 | 125/90  |
    ///
    /// Height band over [150,160,170,180] is [150.75, 179.25], weight band
    /// over [50,65,80,95] is [51.125, 93.875]: records 1 and 4 fall outside
    /// both bands, record 3 has inverted pressures, so only record 2
    /// survives the filter.
    fn reference_records() -> Vec<ExamRecord> {
        let record = |id, height, weight, ap_hi, ap_lo, cholesterol, gluc| ExamRecord {
            id,
            age: 18000,
            gender: 1,
            height,
            weight,
            ap_hi,
            ap_lo,
            cholesterol,
            gluc,
            smoke: 0,
            alco: 0,
            active: 1,
            cardio: u8::from(id % 2 == 0),
            overweight: 0,
        };

        vec![
            record(1, 150.0, 50.0, 120, 80, 1, 3),
            record(2, 160.0, 65.0, 130, 85, 2, 1),
            record(3, 170.0, 80.0, 110, 120, 3, 2),
            record(4, 180.0, 95.0, 125, 90, 1, 1),
        ]
    }

    #[test]
    fn test_end_to_end_reference_table() {
        let mut records = reference_records();
        derive_overweight(&mut records);
        normalize_markers(&mut records);

        assert_eq!(
            records.iter().map(|r| r.overweight).collect::<Vec<_>>(),
            [0, 1, 1, 1]
        );
        assert_eq!(
            records.iter().map(|r| r.cholesterol).collect::<Vec<_>>(),
            [0, 1, 1, 0]
        );
        assert_eq!(
            records.iter().map(|r| r.gluc).collect::<Vec<_>>(),
            [1, 0, 1, 0]
        );

        let filtered = physiological_subset(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);

        let matrix = correlation_matrix(&numeric_columns(&filtered));
        assert_eq!(matrix.len(), 14);
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 1.0);
        }
    }

    #[test]
    fn test_numeric_columns_order() {
        let records = reference_records();
        let columns = numeric_columns(&records);

        let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            [
                "id",
                "age",
                "gender",
                "height",
                "weight",
                "ap_hi",
                "ap_lo",
                "cholesterol",
                "gluc",
                "smoke",
                "alco",
                "active",
                "cardio",
                "overweight"
            ]
        );
        assert!(columns.iter().all(|(_, values)| values.len() == 4));
    }

    #[test]
    fn test_heatmap_fails_on_empty_filtered_table() {
        // Every record has inverted pressures, so filtering drops them all
        let mut records = reference_records();
        for record in &mut records {
            record.ap_hi = 80;
            record.ap_lo = 120;
        }

        let temp_dir = std::env::temp_dir();
        let result = generate_correlation_heatmap(&records, &temp_dir);
        assert!(matches!(result, Err(MedicalError::EmptyFilteredTable)));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_generate_indicator_chart_saves_and_returns_model() {
        let mut records = reference_records();
        derive_overweight(&mut records);
        normalize_markers(&mut records);

        let temp_dir = tempfile::tempdir().unwrap();
        let chart = generate_indicator_chart(&records, temp_dir.path()).unwrap();

        assert!(chart.output_path.exists());
        let total: usize = chart
            .counts
            .iter()
            .filter(|row| row.indicator == "overweight")
            .map(|row| row.total)
            .sum();
        assert_eq!(total, records.len());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_generate_correlation_heatmap_saves_and_returns_model() {
        let mut records = reference_records();
        derive_overweight(&mut records);
        normalize_markers(&mut records);

        let temp_dir = tempfile::tempdir().unwrap();
        let chart = generate_correlation_heatmap(&records, temp_dir.path()).unwrap();

        assert!(chart.output_path.exists());
        assert_eq!(chart.filtered_rows, 1);
        assert_eq!(chart.matrix.len(), chart.mask.len());
    }
}
