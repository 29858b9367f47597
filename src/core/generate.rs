//! Synthetic observation generators for the teaching scenarios.
//!
//! Every generator validates its parameters up front and takes the random
//! source as an argument, so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::primitives::round_to_places;
use crate::core::presets::{ALWAYS_READY, TOUGH_CELL};
use crate::core::Observation;
use crate::error::{ChartError, ChartResult};

/// Highest lifespan (hours) the battery generator accepts.
pub const MAX_BATTERY_LIFESPAN: f64 = 130.0;
pub const MIN_BATTERIES_PER_BRAND: usize = 1;
pub const MAX_BATTERIES_PER_BRAND: usize = 10;

/// Count and value bounds for a uniformly generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformSpec {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

impl UniformSpec {
    #[must_use]
    pub fn new(count: usize, min: f64, max: f64) -> Self {
        Self { count, min, max }
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.count == 0 {
            return Err(ChartError::InvalidGeneratorInput(
                "count must be > 0".to_owned(),
            ));
        }
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ChartError::InvalidGeneratorInput(format!(
                "bounds must be finite with min < max (min={}, max={})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Uniform cholesterol readings rounded to one decimal place.
pub fn generate_cholesterol_data<R: Rng>(
    spec: UniformSpec,
    rng: &mut R,
) -> ChartResult<Vec<f64>> {
    spec.validate()?;
    Ok((0..spec.count)
        .map(|_| round_to_places(rng.random_range(spec.min..spec.max), 1))
        .collect())
}

/// Uniform speed readings rounded to whole numbers.
pub fn generate_speed_trap_data<R: Rng>(
    spec: UniformSpec,
    rng: &mut R,
) -> ChartResult<Vec<f64>> {
    spec.validate()?;
    Ok((0..spec.count)
        .map(|_| round_to_places(rng.random_range(spec.min..spec.max), 0))
        .collect())
}

/// Parameters for the two-brand battery lifespan scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatterySpec {
    pub tough_cell_count: usize,
    pub always_ready_count: usize,
    pub min_lifespan: f64,
    pub max_lifespan: f64,
}

impl BatterySpec {
    pub fn validate(self) -> ChartResult<()> {
        let (min, max) = (self.min_lifespan, self.max_lifespan);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min >= max {
            return Err(ChartError::InvalidGeneratorInput(format!(
                "min lifespan must be >= 0 and below max lifespan (min={min}, max={max})"
            )));
        }
        if min.ceil() > max.floor() {
            return Err(ChartError::InvalidGeneratorInput(format!(
                "lifespan bounds contain no whole hour (min={min}, max={max})"
            )));
        }
        if max > MAX_BATTERY_LIFESPAN {
            return Err(ChartError::InvalidGeneratorInput(format!(
                "max lifespan must not exceed {MAX_BATTERY_LIFESPAN} (max={max})"
            )));
        }
        for (brand, count) in [
            (TOUGH_CELL, self.tough_cell_count),
            (ALWAYS_READY, self.always_ready_count),
        ] {
            if !(MIN_BATTERIES_PER_BRAND..=MAX_BATTERIES_PER_BRAND).contains(&count) {
                return Err(ChartError::InvalidGeneratorInput(format!(
                    "{brand} battery count must be in {MIN_BATTERIES_PER_BRAND}..={MAX_BATTERIES_PER_BRAND} (count={count})"
                )));
            }
        }
        Ok(())
    }
}

/// Whole-hour battery lifespans in `[min_lifespan, max_lifespan]`, all
/// Tough Cell batteries first.
pub fn generate_battery_data<R: Rng>(
    spec: BatterySpec,
    rng: &mut R,
) -> ChartResult<Vec<Observation>> {
    spec.validate()?;
    let low = spec.min_lifespan.ceil() as i64;
    let high = spec.max_lifespan.floor() as i64;

    let mut observations = Vec::with_capacity(spec.tough_cell_count + spec.always_ready_count);
    for (brand, count) in [
        (TOUGH_CELL, spec.tough_cell_count),
        (ALWAYS_READY, spec.always_ready_count),
    ] {
        observations.extend(
            (0..count).map(|_| Observation::labeled(rng.random_range(low..=high) as f64, brand)),
        );
    }
    Ok(observations)
}
