//! Built-in datasets for the teaching scenarios.

use crate::core::Observation;

pub const TOUGH_CELL: &str = "Tough Cell";
pub const ALWAYS_READY: &str = "Always Ready";

const TOUGH_CELL_LIFESPANS: [f64; 10] = [
    114.0, 102.0, 110.0, 120.0, 106.0, 88.0, 105.0, 82.0, 92.0, 98.0,
];
const ALWAYS_READY_LIFESPANS: [f64; 10] = [
    112.0, 74.0, 115.0, 109.0, 112.0, 46.0, 110.0, 104.0, 98.0, 116.0,
];

/// Cholesterol levels before the diet.
pub const CHOLESTEROL_BEFORE: [f64; 61] = [
    48.0, 48.2, 48.7, 48.8, 48.9, 49.3, 49.4, 49.8, 49.8, 50.0, 50.2, 51.0, 50.2, 50.3, 50.7, 50.6,
    50.7, 50.8, 50.9, 50.9, 51.2, 51.3, 51.3, 51.2, 51.1, 51.1, 51.4, 51.4, 51.8, 51.7, 51.7, 51.8,
    52.0, 52.0, 52.3, 52.1, 52.2, 52.6, 52.8, 52.8, 52.9, 53.1, 53.3, 53.2, 53.0, 53.4, 53.9, 53.9,
    54.0, 54.4, 54.7, 54.9, 55.4, 55.6, 56.0, 56.3, 56.6, 57.2, 57.8, 60.3, 63.8,
];

/// Cholesterol levels after the diet.
pub const CHOLESTEROL_AFTER: [f64; 58] = [
    63.8, 62.7, 61.7, 61.2, 60.6, 60.1, 59.8, 59.2, 58.9, 58.4, 58.5, 58.1, 57.9, 57.2, 57.0, 56.8,
    56.3, 55.8, 55.9, 55.4, 55.2, 55.0, 55.0, 54.8, 54.7, 54.2, 54.4, 54.5, 53.8, 53.8, 53.8, 53.6,
    53.5, 53.0, 52.6, 52.6, 52.4, 52.2, 52.2, 53.0, 52.9, 52.8, 53.0, 53.2, 51.8, 51.7, 51.1, 51.1,
    51.2, 51.3, 50.6, 50.4, 50.3, 49.8, 49.7, 49.2, 49.1, 48.0,
];

/// Battery lifespans (hours) for both brands, Tough Cell first.
#[must_use]
pub fn battery_lifespans() -> Vec<Observation> {
    TOUGH_CELL_LIFESPANS
        .iter()
        .map(|&hours| Observation::labeled(hours, TOUGH_CELL))
        .chain(
            ALWAYS_READY_LIFESPANS
                .iter()
                .map(|&hours| Observation::labeled(hours, ALWAYS_READY)),
        )
        .collect()
}
