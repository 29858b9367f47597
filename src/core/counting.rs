use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::LinearScale;

/// Number of observations on either side of a single threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThresholdSplit {
    pub at_or_below: usize,
    pub above: usize,
}

impl ThresholdSplit {
    #[must_use]
    pub fn total(self) -> usize {
        self.at_or_below + self.above
    }
}

/// Counts observations `<= threshold` versus `> threshold`. NaN is ignored.
#[must_use]
pub fn split_at_threshold(values: &[f64], threshold: f64) -> ThresholdSplit {
    values
        .iter()
        .filter(|value| !value.is_nan())
        .fold(ThresholdSplit::default(), |mut split, value| {
            if *value <= threshold {
                split.at_or_below += 1;
            } else {
                split.above += 1;
            }
            split
        })
}

/// Counts observations with `low <= value <= high`.
#[must_use]
pub fn count_in_range(values: &[f64], low: f64, high: f64) -> usize {
    values
        .iter()
        .filter(|value| **value >= low && **value <= high)
        .count()
}

/// Counts observations between two pixel positions of `scale`, both ends inclusive.
#[must_use]
pub fn count_in_pixel_range(values: &[f64], scale: LinearScale, low_px: f64, high_px: f64) -> usize {
    count_in_range(values, scale.invert(low_px), scale.invert(high_px))
}

/// Observation count between two adjacent cut lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapCount {
    pub start_px: f64,
    pub end_px: f64,
    pub value_start: f64,
    pub value_end: f64,
    pub count: usize,
}

impl GapCount {
    #[must_use]
    pub fn mid_px(self) -> f64 {
        (self.start_px + self.end_px) * 0.5
    }
}

/// Splits `[0, width]` at the given cut positions and counts the values in
/// each gap, half-open: `invert(start) <= value < invert(end)`.
///
/// Duplicate and out-of-chart cut positions are ignored. No cuts means no gaps.
#[must_use]
pub fn gap_counts(values: &[f64], scale: LinearScale, cuts_px: &[f64], width: f64) -> Vec<GapCount> {
    if cuts_px.is_empty() {
        return Vec::new();
    }

    let mut boundaries: SmallVec<[OrderedFloat<f64>; 8]> = cuts_px
        .iter()
        .copied()
        .filter(|cut| cut.is_finite() && (0.0..=width).contains(cut))
        .map(OrderedFloat)
        .collect();
    boundaries.push(OrderedFloat(0.0));
    boundaries.push(OrderedFloat(width));
    boundaries.sort_unstable();
    boundaries.dedup();

    boundaries
        .windows(2)
        .filter(|pair| pair[0] < pair[1])
        .map(|pair| {
            let (start_px, end_px) = (pair[0].into_inner(), pair[1].into_inner());
            let value_start = scale.invert(start_px);
            let value_end = scale.invert(end_px);
            let count = values
                .iter()
                .filter(|value| **value >= value_start && **value < value_end)
                .count();
            GapCount {
                start_px,
                end_px,
                value_start,
                value_end,
                count,
            }
        })
        .collect()
}
