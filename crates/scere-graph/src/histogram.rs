//! Distance histogram and cumulative distribution.

use serde::Serialize;

/// Number of histogram bins.
pub const BIN_COUNT: usize = 50;
/// Upper bound of the binned range; distances beyond it are counted
/// in the total but fall in no bin.
pub const RANGE_MAX: f64 = 200.0;

/// Normalized histogram of edge distances over `BIN_COUNT` equal bins
/// spanning `[0, RANGE_MAX]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceHistogram {
    /// Left edge of each bin (the last bin also includes `RANGE_MAX`).
    pub bin_edges: Vec<f64>,
    /// Bin counts divided by the total number of distances; sums to 1
    /// when every distance falls in range.
    pub density: Vec<f64>,
    /// Cumulative distribution over the bins, normalized to end at 1.
    pub cdf: Vec<f64>,
}

impl DistanceHistogram {
    pub fn empty() -> Self {
        let width = RANGE_MAX / BIN_COUNT as f64;
        Self {
            bin_edges: (0..BIN_COUNT).map(|bin| bin as f64 * width).collect(),
            density: vec![0.0; BIN_COUNT],
            cdf: vec![0.0; BIN_COUNT],
        }
    }
}

/// Bin the distances and normalize. Values outside `[0, RANGE_MAX]`
/// contribute to the normalizing total but to no bin; the upper bound
/// itself lands in the last bin.
pub fn distance_histogram(distances: &[f64]) -> DistanceHistogram {
    let mut histogram = DistanceHistogram::empty();
    if distances.is_empty() {
        return histogram;
    }

    let width = RANGE_MAX / BIN_COUNT as f64;
    let mut counts = vec![0u64; BIN_COUNT];
    for &distance in distances {
        if !(0.0..=RANGE_MAX).contains(&distance) {
            continue;
        }
        let bin = ((distance / width) as usize).min(BIN_COUNT - 1);
        counts[bin] += 1;
    }

    let total = distances.len() as f64;
    histogram.density = counts.iter().map(|&count| count as f64 / total).collect();

    let mass: f64 = histogram.density.iter().sum();
    if mass > 0.0 {
        let mut running = 0.0;
        histogram.cdf = histogram
            .density
            .iter()
            .map(|&density| {
                running += density;
                running / mass
            })
            .collect();
    }
    histogram
}
