//! Health indicator count chart
//!
//! Renders the long-form indicator counts as a grouped bar chart with one
//! panel per cardio outcome, bars grouped by indicator name and colored by
//! indicator value, mirroring the layout of a categorical count plot.

use super::{PlotError, Result};
use crate::medical::aggregate::IndicatorCount;
use plotters::prelude::*;
use std::path::Path;

/// Fixed output filename for the indicator count chart
pub const CATPLOT_FILENAME: &str = "catplot.png";

/// Bar fill for indicator value 0 ("good")
const VALUE_0_COLOR: RGBColor = RGBColor(76, 114, 176);
/// Bar fill for indicator value 1 ("bad")
const VALUE_1_COLOR: RGBColor = RGBColor(221, 132, 82);

/// Creates the grouped indicator count chart and saves it as a PNG file.
///
/// One panel is drawn per cardio outcome (0 left, 1 right). Within a panel,
/// bars are grouped by indicator name; each group holds one bar per distinct
/// indicator value present in the counts. Combinations absent from `counts`
/// simply draw no bar.
///
/// # Arguments
/// * `counts` - Long-form (cardio, indicator, value, total) rows
/// * `output_path` - Path where the PNG file should be saved
pub fn render_indicator_chart(counts: &[IndicatorCount], output_path: &Path) -> Result<()> {
    if counts.is_empty() {
        return Err(PlotError::InvalidData(
            "Indicator counts cannot be empty".to_string(),
        ));
    }

    // Indicator names in their deterministic (sorted) order
    let mut names: Vec<&str> = counts.iter().map(|row| row.indicator).collect();
    names.sort_unstable();
    names.dedup();

    let max_total = counts.iter().map(|row| row.total).max().unwrap_or(0);
    let y_max = (max_total as f64 * 1.15).max(1.0);

    let root = BitMapBackend::new(output_path, (1200, 600));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let panels = drawing_area.split_evenly((1, 2));

    for (panel_index, panel) in panels.iter().enumerate() {
        let cardio = panel_index as u8;
        let panel_names = names.clone();

        let mut chart_context = ChartBuilder::on(panel)
            .caption(format!("cardio = {cardio}"), ("sans-serif", 25))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..(panel_names.len() as f64 - 0.5), 0.0..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart_context
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("variable")
            .y_desc("total")
            .x_labels(panel_names.len())
            .x_label_formatter(&|x| {
                let index = x.round();
                if (x - index).abs() < 0.25 && index >= 0.0 && (index as usize) < panel_names.len()
                {
                    panel_names[index as usize].to_string()
                } else {
                    String::new()
                }
            })
            .y_label_formatter(&|y| format!("{:.0}", y.round()))
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        for row in counts.iter().filter(|row| row.cardio == cardio) {
            let Some(group) = panel_names.iter().position(|name| *name == row.indicator) else {
                continue;
            };
            let center = group as f64;
            let (x0, x1, color) = if row.value == 0 {
                (center - 0.35, center - 0.05, VALUE_0_COLOR)
            } else {
                (center + 0.05, center + 0.35, VALUE_1_COLOR)
            };

            chart_context
                .draw_series(std::iter::once(Rectangle::new(
                    [(x0, 0.0), (x1, row.total as f64)],
                    color.filled(),
                )))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }

        // One legend entry per indicator value, drawn as empty series
        chart_context
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label("value = 0")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], VALUE_0_COLOR.filled()));
        chart_context
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label("value = 1")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], VALUE_1_COLOR.filled()));

        chart_context
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
