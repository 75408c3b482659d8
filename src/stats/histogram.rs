/// Equal-width histogram over the observed range of a sample.
///
/// Bins are half-open `[start, start + width)` except the last one, which
/// also includes the maximum. A sample with a single distinct value is
/// widened to `value ± 0.5` so every bin still has a non-zero width.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub width: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn new(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);

        let (mut lo, mut hi) = values
            .iter()
            .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Self { lo, width, counts }
    }

    /// Lower edge of bin `i`.
    pub fn bin_start(&self, i: usize) -> f64 {
        self.lo + self.width * i as f64
    }

    /// Upper edge of the last bin.
    pub fn hi(&self) -> f64 {
        self.bin_start(self.counts.len())
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
