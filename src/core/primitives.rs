use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

pub(crate) fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rounds `value` to `places` decimal places, halves away from zero.
///
/// Values that cannot be represented as a decimal are returned unchanged.
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    decimal_to_f64(rounded, "rounded value").unwrap_or(value)
}

/// Returns `value` restricted to `[lower, upper]`.
///
/// Unlike `f64::clamp` this never panics: when `lower > upper` the lower bound
/// wins. A NaN `value` maps to `lower`.
#[must_use]
pub fn clamp_between(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() {
        return lower;
    }
    value.min(upper).max(lower)
}
