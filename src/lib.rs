//! minitools: dot plot layout, interval binning and drag-tool engine.
//!
//! The crate computes everything a statistics teaching chart needs (stacked
//! dot positions, interval bins, threshold and range counts, axis ticks) as
//! pure functions of the current data, and hands the result to a pluggable
//! renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod storage;
pub mod telemetry;

pub use api::{ChartConfig, DotPlotEngine};
pub use error::{ChartError, ChartResult};
