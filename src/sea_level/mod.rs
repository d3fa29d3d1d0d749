//! Sea-level trend pipeline
//!
//! Fits two ordinary least-squares trends over the sea-level observations
//! (the full history, and the subset from [`RECENT_FIT_START_YEAR`]
//! onwards), extends both fitted lines through
//! [`PREDICTION_HORIZON_YEAR`], and renders the scatter + fit-lines chart.
//!
//! The observed data ends decades before the horizon; the predicted series
//! past the last observation are extrapolations of the fitted trends.

pub mod observations;

pub use observations::{load_observations, SeaLevelObservation};

use crate::charts::trend::{render_trend_chart, TREND_CHART_FILENAME};
use crate::charts::PlotError;
use crate::stats::{fit_line, LinearFit};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Final year (inclusive) of both predicted series
pub const PREDICTION_HORIZON_YEAR: i32 = 2050;

/// First year (inclusive) of the recent-subset fit
pub const RECENT_FIT_START_YEAR: i32 = 2000;

/// Errors that can occur in the sea-level pipeline
#[derive(Error, Debug)]
pub enum SeaLevelError {
    #[error("Failed to read observations: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to generate plot: {0}")]
    Plot(#[from] PlotError),
}

pub(crate) type Result<T> = core::result::Result<T, SeaLevelError>;

/// In-memory model of the rendered trend chart
///
/// Returned by [`generate_trend_chart`] alongside the saved PNG so callers
/// can inspect exactly what was drawn.
#[derive(Debug, Clone)]
pub struct TrendChart {
    /// Observed (year, level) points, in load order
    pub observations: Vec<(i32, f64)>,
    /// Fit over the full observed history
    pub full_fit: LinearFit,
    /// Full-history fitted line, evaluated from the first observed year
    /// through the horizon
    pub full_predictions: Vec<(i32, f64)>,
    /// Fit over the observations from [`RECENT_FIT_START_YEAR`] onwards
    pub recent_fit: LinearFit,
    /// Recent fitted line, evaluated from [`RECENT_FIT_START_YEAR`] through
    /// the horizon
    pub recent_predictions: Vec<(i32, f64)>,
    /// Path of the saved PNG
    pub output_path: PathBuf,
}

/// Fits both sea-level trends, renders the chart, and saves it as
/// `sea_level_plot.png` in `output_dir`.
///
/// # Preconditions
/// The observations must contain at least two distinct years overall and at
/// least two distinct years at or after [`RECENT_FIT_START_YEAR`]; zero
/// year-variance leaves either fit undefined.
///
/// # Arguments
/// * `observations` - The loaded observation table
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(TrendChart)` - The chart model that was rendered
/// * `Err(SeaLevelError)` - If rendering or saving failed
pub fn generate_trend_chart(
    observations: &[SeaLevelObservation],
    output_dir: &Path,
) -> Result<TrendChart> {
    let points: Vec<(i32, f64)> = observations.iter().map(|o| (o.year, o.level)).collect();

    let all: Vec<(f64, f64)> = points
        .iter()
        .map(|(year, level)| (f64::from(*year), *level))
        .collect();
    let recent: Vec<(f64, f64)> = points
        .iter()
        .filter(|(year, _)| *year >= RECENT_FIT_START_YEAR)
        .map(|(year, level)| (f64::from(*year), *level))
        .collect();

    let first_year = points.iter().map(|(year, _)| *year).min().unwrap_or(0);

    let full_fit = fit_line(&all);
    let full_predictions = full_fit.predict_years(first_year..=PREDICTION_HORIZON_YEAR);

    let recent_fit = fit_line(&recent);
    let recent_predictions =
        recent_fit.predict_years(RECENT_FIT_START_YEAR..=PREDICTION_HORIZON_YEAR);

    let output_path = output_dir.join(TREND_CHART_FILENAME);
    render_trend_chart(&points, &full_predictions, &recent_predictions, &output_path)?;

    Ok(TrendChart {
        observations: points,
        full_fit,
        full_predictions,
        recent_fit,
        recent_predictions,
        output_path,
    })
}
