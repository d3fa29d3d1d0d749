//! Chart rendering infrastructure
//!
//! This module renders the analysis artifacts as PNG files using the
//! [`plotters`] crate:
//! - Sea-level scatter plot with two fitted trend lines
//! - Grouped bar chart of health indicator counts, split by cardio outcome
//! - Masked lower-triangle correlation heatmap
//!
//! Charts use the bitmap backend with default font rendering so they work
//! in headless environments.

pub mod categorical;
pub mod heatmap;
pub mod trend;

use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub(crate) type Result<T> = core::result::Result<T, PlotError>;
