use serde::{Deserialize, Serialize};
use tracing::warn;

/// Upper bound on emitted bins; a finer partition is treated as degenerate.
pub const MAX_INTERVAL_BINS: usize = 100_000;

/// Half-open value interval `[value_min, value_max)` with its membership count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBin {
    pub value_min: f64,
    pub value_max: f64,
    pub count: usize,
}

impl IntervalBin {
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.value_min && value < self.value_max
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.value_min + self.value_max) * 0.5
    }
}

/// Partitions `[domain_min, domain_max]` into bins of `interval_width` and
/// counts the values falling in each bin.
///
/// The first bin starts at `floor(domain_min / interval_width) * interval_width`
/// and bins are emitted while their lower edge is `<= domain_max`, so the last
/// bin always ends past `domain_max`. A value on a boundary belongs to the
/// upper bin. Degenerate input (empty data, non-positive or non-finite width,
/// non-finite domain) yields no bins. An inverted domain is swapped.
#[must_use]
pub fn compute_interval_bins(
    values: &[f64],
    interval_width: f64,
    domain_min: f64,
    domain_max: f64,
) -> Vec<IntervalBin> {
    if values.is_empty() || !interval_width.is_finite() || interval_width <= 0.0 {
        return Vec::new();
    }
    if !domain_min.is_finite() || !domain_max.is_finite() {
        return Vec::new();
    }
    let (domain_min, domain_max) = if domain_min <= domain_max {
        (domain_min, domain_max)
    } else {
        (domain_max, domain_min)
    };

    let mut start = (domain_min / interval_width).floor() * interval_width;
    if start > domain_min {
        // `floor` of a quotient that rounded up to an integer.
        start -= interval_width;
    }
    let span_bins = ((domain_max - start) / interval_width).floor();
    if !span_bins.is_finite() || span_bins >= MAX_INTERVAL_BINS as f64 {
        warn!(
            interval_width,
            domain_min, domain_max, "interval width too fine for domain, skipping bins"
        );
        return Vec::new();
    }

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let edge = |index: usize| start + index as f64 * interval_width;
    let mut bins = Vec::new();
    let mut index = 0;
    while edge(index) <= domain_max && bins.len() < MAX_INTERVAL_BINS {
        bins.push(count_bin(&sorted, edge(index), edge(index + 1)));
        index += 1;
    }

    // Rounding in `edge` must not leave `domain_max` outside the last bin.
    if bins.last().is_some_and(|last| last.value_max <= domain_max) {
        bins.push(count_bin(&sorted, edge(index), edge(index + 1)));
    }

    bins
}

/// Bins `values` over their own extent, so every finite value is counted once.
#[must_use]
pub fn bin_dataset(values: &[f64], interval_width: f64) -> Vec<IntervalBin> {
    match value_extent(values) {
        Some((min, max)) => compute_interval_bins(values, interval_width, min, max),
        None => Vec::new(),
    }
}

/// Minimum and maximum finite value, `None` when there is none.
#[must_use]
pub fn value_extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(None, |extent, value| match extent {
            None => Some((value, value)),
            Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
        })
}

fn count_bin(sorted: &[f64], value_min: f64, value_max: f64) -> IntervalBin {
    let lower = sorted.partition_point(|value| *value < value_min);
    let upper = sorted.partition_point(|value| *value < value_max);
    IntervalBin {
        value_min,
        value_max,
        count: upper.saturating_sub(lower),
    }
}
