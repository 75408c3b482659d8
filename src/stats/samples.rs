use tracing::trace;

use crate::catalog::{Catalog, extract};

pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Index-aligned ratings and durations.
///
/// `ratings[i]` and `durations_ms[i]` always come from the same track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSamples {
    ratings: Vec<u64>,
    durations_ms: Vec<u64>,
}

impl StatsSamples {
    /// Append one sample. Both values are pushed together.
    pub fn push(&mut self, rating: u64, duration_ms: u64) {
        self.ratings.push(rating);
        self.durations_ms.push(duration_ms);
    }

    pub fn ratings(&self) -> &[u64] {
        &self.ratings
    }

    pub fn durations_ms(&self) -> &[u64] {
        &self.durations_ms
    }

    /// Durations converted from milliseconds to minutes.
    pub fn durations_minutes(&self) -> Vec<f64> {
        self.durations_ms
            .iter()
            .map(|&ms| ms as f64 / MS_PER_MINUTE)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() || self.durations_ms.is_empty()
    }
}

/// Collect `(Album Rating, Total Time)` from every record that has both.
pub fn collect_stats(catalog: &Catalog) -> StatsSamples {
    let mut samples = StatsSamples::default();

    for (id, record) in catalog.tracks() {
        let fields = extract::album_rating(record)
            .and_then(|rating| Ok((rating, extract::total_time(record)?)));
        match fields {
            Ok((rating, duration_ms)) => samples.push(rating, duration_ms),
            Err(err) => trace!(track_id = id, %err, "skipping track"),
        }
    }

    samples
}
