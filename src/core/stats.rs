use serde::{Deserialize, Serialize};

use crate::core::binning::value_extent;

/// Extent used when no dataset carries a finite value.
pub const DEFAULT_EXTENT: (f64, f64) = (0.0, 100.0);

/// Five-number summary of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quartiles {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// How the dot plot is split into equal-count groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Grouping {
    #[default]
    None,
    /// Two groups split at the median.
    Median,
    /// Four groups split at the quartiles.
    Quartiles,
}

/// Computes the five-number summary. An empty dataset yields all zeros.
///
/// `q1` is the element at `floor(floor(n / 2) / 2)` and `q3` the element at
/// `ceil(0.75 * n) - 1` of the sorted data; the median averages the two middle
/// elements for even `n`.
#[must_use]
pub fn quartiles(values: &[f64]) -> Quartiles {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return Quartiles::default();
    }
    sorted.sort_by(f64::total_cmp);

    let len = sorted.len();
    let mid = len / 2;
    let median = if len % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    let q3_index = ((len as f64 * 0.75).ceil() as usize).saturating_sub(1);

    Quartiles {
        min: sorted[0],
        q1: sorted[mid / 2],
        median,
        q3: sorted[q3_index],
        max: sorted[len - 1],
    }
}

/// Data-driven group separators for `grouping`.
#[must_use]
pub fn grouping_separators(values: &[f64], grouping: Grouping) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let stats = quartiles(values);
    match grouping {
        Grouping::None => Vec::new(),
        Grouping::Median => vec![stats.min, stats.median, stats.max],
        Grouping::Quartiles => vec![stats.min, stats.q1, stats.median, stats.q3, stats.max],
    }
}

/// Evenly spaced guide values splitting the domain into equal-width groups.
#[must_use]
pub fn domain_guides(domain_min: f64, domain_max: f64, grouping: Grouping) -> Vec<f64> {
    if !domain_min.is_finite() || !domain_max.is_finite() || domain_min > domain_max {
        return Vec::new();
    }
    let fractions: &[f64] = match grouping {
        Grouping::None => &[],
        Grouping::Median => &[0.0, 0.5, 1.0],
        Grouping::Quartiles => &[0.0, 0.25, 0.5, 0.75, 1.0],
    };
    let span = domain_max - domain_min;
    fractions
        .iter()
        .map(|fraction| domain_min + fraction * span)
        .collect()
}

/// Overall `(min, max)` across several datasets, falling back to
/// [`DEFAULT_EXTENT`] when none has a finite value.
#[must_use]
pub fn combined_extent<S: AsRef<[f64]>>(datasets: &[S]) -> (f64, f64) {
    datasets
        .iter()
        .filter_map(|dataset| value_extent(dataset.as_ref()))
        .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
        .unwrap_or(DEFAULT_EXTENT)
}
