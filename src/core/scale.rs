use serde::{Deserialize, Serialize};

use crate::core::ticks::{nice_ticks, stepped_ticks};

/// Affine mapping between a value domain and a pixel range.
///
/// The scale never clamps: values outside the domain map outside the range.
/// A degenerate domain (`domain_min == domain_max`) maps every value to
/// `range_min`, and a degenerate range inverts every pixel to `domain_min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    /// Scale over `[domain_min, domain_max]` onto `[0, width]`.
    #[must_use]
    pub fn with_width(domain_min: f64, domain_max: f64, width: f64) -> Self {
        Self::new(domain_min, domain_max, 0.0, width)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_min == self.domain_max
    }

    #[must_use]
    pub fn forward(self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return self.range_min;
        }
        let normalized = (value - self.domain_min) / span;
        self.range_min + normalized * (self.range_max - self.range_min)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_max - self.range_min;
        if span == 0.0 || self.is_degenerate() {
            return self.domain_min;
        }
        let normalized = (pixel - self.range_min) / span;
        self.domain_min + normalized * (self.domain_max - self.domain_min)
    }

    /// Roughly `count` human-friendly ticks across the domain, domain ends included.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_min, self.domain_max, count)
    }

    /// Ticks every `step` from `domain_min`, domain ends included.
    #[must_use]
    pub fn stepped_ticks(self, step: f64) -> Vec<f64> {
        stepped_ticks(self.domain_min, self.domain_max, step)
    }
}
