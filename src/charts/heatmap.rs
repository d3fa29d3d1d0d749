//! Correlation heatmap
//!
//! Renders a correlation matrix as a colored cell grid with per-cell value
//! annotations. Cells flagged by the upper-triangle mask are skipped, so
//! only the lower triangle (diagonal included) is drawn.

use super::{PlotError, Result};
use crate::stats::CorrelationMatrix;
use plotters::prelude::*;
use std::path::Path;

/// Fixed output filename for the correlation heatmap
pub const HEATMAP_FILENAME: &str = "heatmap.png";

/// Upper bound of the color scale; coefficients at or above render fully
/// saturated warm
const COLOR_SCALE_MAX: f64 = 0.3;
/// Lower bound of the color scale; coefficients at or below render fully
/// saturated cool
const COLOR_SCALE_MIN: f64 = -0.1;

/// Maps a correlation coefficient onto the diverging color scale.
///
/// Zero maps to white; positive values blend toward red, negative values
/// toward blue. The scale saturates at [`COLOR_SCALE_MIN`] and
/// [`COLOR_SCALE_MAX`]. NaN coefficients render as a neutral grey.
fn cell_color(value: f64) -> RGBColor {
    if value.is_nan() {
        return RGBColor(200, 200, 200);
    }

    if value >= 0.0 {
        let t = (value / COLOR_SCALE_MAX).clamp(0.0, 1.0);
        let fade = (255.0 * (1.0 - t)) as u8;
        RGBColor(255, fade, fade)
    } else {
        let t = (value / COLOR_SCALE_MIN).clamp(0.0, 1.0);
        let fade = (255.0 * (1.0 - t)) as u8;
        RGBColor(fade, fade, 255)
    }
}

/// Creates the masked correlation heatmap and saves it as a PNG file.
///
/// Matrix row 0 is drawn at the top. Each unmasked cell is filled from the
/// diverging color scale and annotated with its coefficient formatted to one
/// decimal place.
///
/// # Arguments
/// * `matrix` - The correlation matrix to render
/// * `mask` - Same-shaped boolean mask; `true` cells are not drawn
/// * `output_path` - Path where the PNG file should be saved
pub fn render_heatmap(
    matrix: &CorrelationMatrix,
    mask: &[Vec<bool>],
    output_path: &Path,
) -> Result<()> {
    if matrix.is_empty() {
        return Err(PlotError::InvalidData(
            "Correlation matrix cannot be empty".to_string(),
        ));
    }
    if mask.len() != matrix.len() {
        return Err(PlotError::InvalidData(format!(
            "Mask has {} rows but matrix has {}",
            mask.len(),
            matrix.len()
        )));
    }

    let n = matrix.len();
    let labels = matrix.labels();

    let root = BitMapBackend::new(output_path, (1000, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|x| {
            let index = x.floor() as usize;
            if x.fract() != 0.0 || index >= n {
                return String::new();
            }
            labels[index].clone()
        })
        .y_label_formatter(&|y| {
            let index = y.floor() as usize;
            if y.fract() != 0.0 || index >= n {
                return String::new();
            }
            // Row 0 sits at the top of the grid
            labels[n - 1 - index].clone()
        })
        .label_style(("sans-serif", 13))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for row in 0..n {
        for column in 0..n {
            if mask[row][column] {
                continue;
            }
            let value = matrix.get(row, column);
            let y0 = (n - 1 - row) as f64;
            let x0 = column as f64;

            chart_context
                .draw_series(std::iter::once(Rectangle::new(
                    [(x0, y0), (x0 + 1.0, y0 + 1.0)],
                    cell_color(value).filled(),
                )))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;

            chart_context
                .draw_series(std::iter::once(Text::new(
                    format!("{value:.1}"),
                    (x0 + 0.35, y0 + 0.55),
                    ("sans-serif", 14),
                )))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }
    }

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
