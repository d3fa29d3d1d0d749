//! Statistical analysis and visualization for two public datasets
//!
//! Two independent batch pipelines, each a linear sequence of pure data
//! transformations ending in a saved PNG chart:
//!
//! - [`sea_level`] - loads EPA sea-level observations, fits linear trends
//!   over the full history and the year-2000 subset, and extrapolates both
//!   through 2050 on a scatter + fit-lines chart.
//! - [`medical`] - loads patient examination records, derives the
//!   overweight flag, normalizes the cholesterol/glucose markers, and
//!   renders an indicator count chart plus a masked correlation heatmap
//!   over the physiologically filtered table.
//!
//! Every chart entry point both writes its PNG and returns the in-memory
//! chart model it rendered, so tests and callers can inspect exactly what
//! was drawn. The shared numeric primitives (least-squares fitting,
//! quantiles, Pearson correlation) live in [`stats`]; rendering lives in
//! [`charts`].

pub mod charts;
pub mod medical;
pub mod sea_level;
pub mod stats;
