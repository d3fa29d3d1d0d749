//! Sea-level trend chart
//!
//! Renders the observed sea levels as a scatter plot overlaid with the two
//! fitted trend lines (full history and year-2000 onwards), both extended
//! through the prediction horizon.

use super::{PlotError, Result};
use plotters::prelude::*;
use std::path::Path;

/// Fixed output filename for the sea-level trend chart
pub const TREND_CHART_FILENAME: &str = "sea_level_plot.png";

/// Creates the sea-level scatter + fit-lines chart and saves it as a PNG
/// file.
///
/// # Arguments
/// * `observations` - Observed (year, level) points drawn as the scatter
/// * `full_predictions` - Fitted line over the full history, extended to the
///   horizon
/// * `recent_predictions` - Fitted line over the recent subset, extended to
///   the horizon
/// * `output_path` - Path where the PNG file should be saved
///
/// # Chart Properties
/// * Resolution: 1000x600 pixels
/// * Scatter: blue, semi-transparent
/// * Fit lines: red (full history), green (recent subset), with legend
///   labels naming each line's year span
pub fn render_trend_chart(
    observations: &[(i32, f64)],
    full_predictions: &[(i32, f64)],
    recent_predictions: &[(i32, f64)],
    output_path: &Path,
) -> Result<()> {
    if observations.is_empty() {
        return Err(PlotError::InvalidData(
            "Observations cannot be empty".to_string(),
        ));
    }
    if full_predictions.is_empty() || recent_predictions.is_empty() {
        return Err(PlotError::InvalidData(
            "Prediction series cannot be empty".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, (1000, 600));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Axis ranges cover both the observations and the extrapolated lines
    let all_points = observations
        .iter()
        .chain(full_predictions)
        .chain(recent_predictions);
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (x, y) in all_points {
        x_min = x_min.min(f64::from(*x));
        x_max = x_max.max(f64::from(*x));
        y_min = y_min.min(*y);
        y_max = y_max.max(*y);
    }
    let y_pad = (y_max - y_min).max(1.0) * 0.05;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption("Rise in Sea Level", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min - 2.0)..(x_max + 2.0),
            (y_min - y_pad)..(y_max + y_pad),
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Sea Level (inches)")
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .label_style(("sans-serif", 15))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Observed levels as a semi-transparent scatter
    chart_context
        .draw_series(observations.iter().map(|(year, level)| {
            Circle::new((f64::from(*year), *level), 3, BLUE.mix(0.5).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let full_label = format!(
        "Fit: {}-{}",
        full_predictions[0].0,
        full_predictions[full_predictions.len() - 1].0
    );
    chart_context
        .draw_series(LineSeries::new(
            full_predictions
                .iter()
                .map(|(year, level)| (f64::from(*year), *level)),
            &RED,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(full_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    let recent_label = format!(
        "Fit: {}-{}",
        recent_predictions[0].0,
        recent_predictions[recent_predictions.len() - 1].0
    );
    chart_context
        .draw_series(LineSeries::new(
            recent_predictions
                .iter()
                .map(|(year, level)| (f64::from(*year), *level)),
            &GREEN,
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(recent_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart_context
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
