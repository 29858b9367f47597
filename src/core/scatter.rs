use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;

/// One dot of a stacked dot plot.
///
/// `stack_index` is the 1-based occurrence number of `value` in input order;
/// `level` is the collision-resolved vertical slot and is never below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub value: f64,
    pub stack_index: usize,
    pub level: usize,
}

/// Lays out dots of radius `dot_radius` so that no two dots on the same level
/// overlap horizontally.
#[must_use]
pub fn compute_scatter(values: &[f64], scale: LinearScale, dot_radius: f64) -> Vec<ScatterPoint> {
    stack_points(values, scale, dot_radius * 2.0)
}

/// Assigns every value a stacking level.
///
/// Points are placed in ascending value order (stable for ties). Each point
/// starts at its `stack_index` and moves up while a point already placed on
/// the same level lies strictly closer than `min_distance` pixels.
/// The result is in placement order.
#[must_use]
pub fn stack_points(values: &[f64], scale: LinearScale, min_distance: f64) -> Vec<ScatterPoint> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut occurrences: IndexMap<OrderedFloat<f64>, usize> = IndexMap::new();
    let mut pending: Vec<(f64, usize)> = values
        .iter()
        .map(|&value| {
            let seen = occurrences.entry(OrderedFloat(value)).or_insert(0);
            *seen += 1;
            (value, *seen)
        })
        .collect();
    pending.sort_by(|left, right| left.0.total_cmp(&right.0));

    // Pixel x of every placed dot, bucketed by level. Only the current level
    // can collide, so scanning one bucket is equivalent to scanning them all.
    let mut placed_by_level: IndexMap<usize, Vec<f64>> = IndexMap::new();
    let mut placed = Vec::with_capacity(pending.len());

    for (value, stack_index) in pending {
        let x = scale.forward(value);
        let mut level = stack_index;
        while placed_by_level
            .get(&level)
            .is_some_and(|xs| xs.iter().any(|placed_x| (x - placed_x).abs() < min_distance))
        {
            level += 1;
        }
        placed_by_level.entry(level).or_default().push(x);
        placed.push(ScatterPoint {
            value,
            stack_index,
            level,
        });
    }

    placed
}

/// Highest level used by `points`, never less than 1.
#[must_use]
pub fn max_level(points: &[ScatterPoint]) -> usize {
    points.iter().map(|point| point.level).max().unwrap_or(1).max(1)
}
