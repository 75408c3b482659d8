//! Rating/duration statistics for the plot view.
//!
//! `collect_stats` keeps only records carrying both `Album Rating` and
//! `Total Time`; `PlotData` turns the result into chart-ready points,
//! axis bounds and a duration histogram.

mod histogram;
mod plot_data;
mod samples;

pub use plot_data::PlotData;
pub use samples::{StatsSamples, collect_stats};
