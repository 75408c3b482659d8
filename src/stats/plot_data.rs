use crate::config::PlotSettings;

use super::histogram::Histogram;
use super::samples::StatsSamples;

/// Everything the plot view needs, precomputed from the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// `(duration in minutes, rating)` per sample.
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub max_minutes: f64,
    pub histogram: Histogram,
}

impl PlotData {
    pub fn from_samples(samples: &StatsSamples, settings: &PlotSettings) -> Self {
        let minutes = samples.durations_minutes();
        let points: Vec<(f64, f64)> = minutes
            .iter()
            .zip(samples.ratings())
            .map(|(&m, &r)| (m, r as f64))
            .collect();

        let max_minutes = minutes.iter().copied().fold(0.0, f64::max);
        let mut x_hi = settings.duration_headroom * max_minutes;
        // A chart axis needs a non-empty range.
        if x_hi <= 0.0 {
            x_hi = 1.0;
        }

        Self {
            points,
            x_bounds: [0.0, x_hi],
            y_bounds: [settings.rating_min, settings.rating_max],
            max_minutes,
            histogram: Histogram::new(&minutes, settings.histogram_bins),
        }
    }
}
